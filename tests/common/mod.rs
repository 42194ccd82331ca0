#![allow(dead_code)]

use seabattle::{BoardSize, Game, Orientation, Player, Ship};

pub fn size5() -> BoardSize {
    BoardSize::new(5, 5).unwrap()
}

/// Host fleet: a 2-ship on (0,0)-(1,0) and 1-ships on (4,0) and (0,4).
pub fn host_fleet() -> Vec<Ship> {
    let size = size5();
    vec![
        Ship::new(2, 0, 0, Orientation::East, size).unwrap(),
        Ship::new(1, 4, 0, Orientation::North, size).unwrap(),
        Ship::new(1, 0, 4, Orientation::North, size).unwrap(),
    ]
}

/// Opponent fleet: a 2-ship on (0,0)-(0,1) and 1-ships on (4,4) and (2,2).
pub fn opponent_fleet() -> Vec<Ship> {
    let size = size5();
    vec![
        Ship::new(2, 0, 0, Orientation::South, size).unwrap(),
        Ship::new(1, 4, 4, Orientation::West, size).unwrap(),
        Ship::new(1, 2, 2, Orientation::East, size).unwrap(),
    ]
}

pub fn fixed_game() -> Game {
    let size = size5();
    let host = Player::from_fleet("Host", size, host_fleet()).unwrap();
    let opponent = Player::from_fleet("Computer", size, opponent_fleet()).unwrap();
    Game::from_players(size, [host, opponent], 0).unwrap()
}
