use anyhow::{Error, Result};
use async_std::channel::{Receiver, Sender};
use async_std::io::{stdin, BufReader};
use async_std::task::block_on;
use futures::{AsyncBufReadExt, StreamExt};
use log::{error, LevelFilter};
use narabe::text::render_game;
use narabe::{new_game_host, Game, GameConfig, HostCommand, HostResponse};
use std::env;
use std::str::FromStr;

const USAGE: &str = "usage: ./narabe [{rows} {cols} {win length}], example: ./narabe 15 15 5";

fn main() {
    env_logger::builder()
        .filter_module("narabe", LevelFilter::Info)
        .init();
    let args: Vec<String> = env::args().collect();
    let config = match parse_config(&args[1..]) {
        Ok(config) => config,
        Err(e) => {
            println!("{}\n{}", e, USAGE);
            return;
        }
    };
    if let Err(e) = block_on(run_game(config)) {
        error!("game stopped on error {}", e);
    }
}

/// no argument for the default board, otherwise exactly three positive numbers
fn parse_config(args: &[String]) -> Result<GameConfig> {
    match args {
        [] => Ok(GameConfig::default()),
        [rows, cols, win_length] => {
            let config = GameConfig::new(
                parse_number(rows)?,
                parse_number(cols)?,
                parse_number(win_length)?,
            );
            config.validate()?;
            Ok(config)
        }
        _ => Err(Error::msg("expect zero or three arguments")),
    }
}

fn parse_number(arg: &str) -> Result<usize> {
    usize::from_str(arg).map_err(|e| Error::msg(format!("bad number {:?}: {}", arg, e)))
}

async fn run_game(config: GameConfig) -> Result<()> {
    let (commands, responses) = new_game_host(0, &config)?;
    println!("{}", render_game(&snapshot(&commands, &responses).await?));
    let mut lines = BufReader::new(stdin()).lines();
    while let Some(line) = lines.next().await {
        let line = line?;
        let (row, col) = match parse_move(&line) {
            Some(coordinates) => coordinates,
            None => {
                println!("> expect \"{{row}} {{col}}\", got {:?}", line.trim());
                continue;
            }
        };
        commands.send(HostCommand::Proceed { row, col }).await?;
        if let HostResponse::Report(report) = responses.recv().await? {
            if !report.is_success {
                if let Some(failure) = report.failure {
                    println!("> cannot place at ({}, {}): {}", row, col, failure);
                }
                continue;
            }
        }
        let game = snapshot(&commands, &responses).await?;
        println!("{}", render_game(&game));
        if game.is_ended() {
            break;
        }
        if game.board().is_full() {
            println!("> board full, no winner");
            break;
        }
    }
    let _ = commands.send(HostCommand::Kill).await;
    Ok(())
}

async fn snapshot(
    commands: &Sender<HostCommand>,
    responses: &Receiver<HostResponse>,
) -> Result<Game> {
    commands.send(HostCommand::Snapshot).await?;
    match responses.recv().await? {
        HostResponse::Snapshot(game) => Ok(game),
        other => Err(Error::msg(format!("unexpected response {:?}", other))),
    }
}

fn parse_move(line: &str) -> Option<(usize, usize)> {
    let mut numbers = line.split_whitespace().map(usize::from_str);
    match (numbers.next(), numbers.next(), numbers.next()) {
        (Some(Ok(row)), Some(Ok(col)), None) => Some((row, col)),
        _ => None,
    }
}
