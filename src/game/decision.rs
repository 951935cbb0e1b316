use serde::Serialize;

/// a player's choice at each of the two decision points:
/// leave the bet riding or pull it back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Decision {
    Ride,
    Pull,
}

impl std::fmt::Display for Decision {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Decision::Ride => "ride",
                Decision::Pull => "pull",
            }
        )
    }
}
