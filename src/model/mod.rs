pub use neurotile_core::{GenomeLogic, NetworkLogic, TerrainLogic};
pub mod config {
    pub use neurotile_core::config::*;
}
pub mod control {
    pub use neurotile_core::control::*;
}
pub mod creature {
    pub use neurotile_core::creature::*;
}
pub mod metrics {
    pub use neurotile_core::metrics::*;
}
pub mod network {
    pub use neurotile_core::network::*;
}
pub mod snapshot {
    pub use neurotile_core::snapshot::*;
}
pub mod terrain {
    pub use neurotile_core::terrain::*;
}

pub mod simulation;
