use crate::game::config::GameConfig;
use crate::game::game::{Game, PlacementReport};
use crate::CHANNEL_SIZE;
use anyhow::{Error, Result};
use async_std::channel::{bounded, Receiver, Sender};
use async_std::task;
use futures::StreamExt;
#[allow(unused_imports)]
use log::trace;
use log::info;

#[derive(Debug)]
pub enum HostCommand {
    Proceed { row: usize, col: usize },
    Snapshot,
    Kill,
}

#[derive(Debug)]
pub enum HostResponse {
    Report(PlacementReport),
    /// a copy of the game, for rendering
    Snapshot(Game),
}

/// Start a task owning one game.
///
/// Commands are applied one at a time in arrival order, so concurrent callers
/// sharing the `Sender` never interleave inside `proceed`.
///
/// This actor stops when it gets a `Kill` signal, when all command senders are
/// dropped, or when its response receiver gets dropped.
pub fn new_game_host(
    game_id: u64,
    config: &GameConfig,
) -> Result<(Sender<HostCommand>, Receiver<HostResponse>)> {
    let mut game = Game::with_config(config)?;
    let (cmd_s, mut commands) = bounded(CHANNEL_SIZE);
    let (response, rsp_r) = bounded(CHANNEL_SIZE);
    info!(
        "game {} launched on a {}x{} board, {} in a row wins",
        game_id, config.row_count, config.col_count, config.win_length
    );
    task::spawn(async move {
        while let Some(command) = commands.next().await {
            #[cfg(debug_assertions)]
            trace!("game {} received command {:?}", game_id, command);
            if execute_command(game_id, &mut game, command, &response)
                .await
                .is_err()
            {
                #[cfg(debug_assertions)]
                trace!("game {} host stopped on err", game_id);
                break;
            }
        }
        #[cfg(debug_assertions)]
        trace!("game {} host stopped", game_id);
    });
    Ok((cmd_s, rsp_r))
}

/// the error of this function means game killed or receivers dropped, just exit
async fn execute_command(
    game_id: u64,
    game: &mut Game,
    command: HostCommand,
    response: &Sender<HostResponse>,
) -> Result<()> {
    match command {
        HostCommand::Proceed { row, col } => {
            let report = game.proceed(row, col);
            if let Some(winner) = report.winner {
                info!("game {} won by {}", game_id, winner);
            }
            Ok(response.send(HostResponse::Report(report)).await?)
        }
        HostCommand::Snapshot => Ok(response.send(HostResponse::Snapshot(game.clone())).await?),
        HostCommand::Kill => Err(Error::msg("game killed")),
    }
}

#[cfg(test)]
mod test_host {
    use super::*;
    use crate::game::piece::Color::{Black, White};
    use crate::game::piece::PieceColor;
    use async_std::task::block_on;

    async fn proceed(
        commands: &Sender<HostCommand>,
        responses: &Receiver<HostResponse>,
        row: usize,
        col: usize,
    ) -> PlacementReport {
        commands
            .send(HostCommand::Proceed { row, col })
            .await
            .unwrap();
        match responses.recv().await.unwrap() {
            HostResponse::Report(report) => report,
            other => panic!("unexpected response {:?}", other),
        }
    }

    #[test]
    fn test_bad_config() {
        assert!(new_game_host(0, &GameConfig::new(0, 3, 3)).is_err());
    }

    #[test]
    fn test_play_to_win() {
        block_on(async {
            let (commands, responses) = new_game_host(1, &GameConfig::new(3, 3, 3)).unwrap();
            let moves = [(0, 0), (1, 0), (0, 1), (1, 1)];
            for (row, col) in moves {
                let report = proceed(&commands, &responses, row, col).await;
                assert!(report.is_success);
                assert_eq!(report.winner, None);
            }
            let report = proceed(&commands, &responses, 0, 2).await;
            assert!(report.is_success);
            assert_eq!(report.winner, Some(Black));
            let report = proceed(&commands, &responses, 2, 2).await;
            assert!(!report.is_success);
            assert_eq!(report.color, White);
        });
    }

    #[test]
    fn test_snapshot() {
        block_on(async {
            let (commands, responses) = new_game_host(2, &GameConfig::new(4, 4, 4)).unwrap();
            proceed(&commands, &responses, 2, 3).await;
            commands.send(HostCommand::Snapshot).await.unwrap();
            match responses.recv().await.unwrap() {
                HostResponse::Snapshot(game) => {
                    assert_eq!(game.next_player(), White);
                    assert_eq!(game.move_count(), 1);
                    assert_eq!(game.board().occupant(2, 3), Some(PieceColor::Black));
                }
                other => panic!("unexpected response {:?}", other),
            }
        });
    }

    #[test]
    fn test_kill() {
        block_on(async {
            let (commands, responses) = new_game_host(3, &GameConfig::default()).unwrap();
            commands.send(HostCommand::Kill).await.unwrap();
            // the host drops its response sender on exit
            assert!(responses.recv().await.is_err());
        });
    }

    #[test]
    fn test_concurrent_senders() {
        block_on(async {
            let (commands, responses) = new_game_host(4, &GameConfig::new(3, 3, 4)).unwrap();
            let mut senders = Vec::new();
            for i in 0..9 {
                let commands = commands.clone();
                senders.push(task::spawn(async move {
                    commands
                        .send(HostCommand::Proceed {
                            row: i / 3,
                            col: i % 3,
                        })
                        .await
                        .unwrap();
                }));
            }
            for sender in senders {
                sender.await;
            }
            let mut colors = Vec::new();
            for _ in 0..9 {
                match responses.recv().await.unwrap() {
                    HostResponse::Report(report) => {
                        assert!(report.is_success);
                        colors.push(report.color);
                    }
                    other => panic!("unexpected response {:?}", other),
                }
            }
            // strictly alternating no matter which sender came first
            for pair in colors.windows(2) {
                assert_eq!(pair[1], pair[0].opposite());
            }
            assert_eq!(colors[0], Black);
        });
    }
}
