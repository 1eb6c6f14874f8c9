//! `evsim-algorithms` — the built-in library of ten scheduling policies.
//!
//! | Module                  | Policy               |
//! |--------------------------|----------------------|
//! | [`fcfs`]                 | First-Come-First-Served |
//! | [`scan`]                 | SCAN                 |
//! | [`look`]                 | LOOK                 |
//! | [`c_scan`]                | C-SCAN               |
//! | [`c_look`]                | C-LOOK               |
//! | [`n_step_scan`]           | N-Step SCAN          |
//! | [`n_step_look`]           | N-Step LOOK          |
//! | [`rolling`]               | Rolling              |
//! | [`scatter`]               | Scatter              |
//! | [`destination_dispatch`]  | Destination Dispatch |
//!
//! [`register_all`] seeds an [`AlgorithmRegistry`] with every policy above
//! under its stable name.

pub mod c_look;
pub mod c_scan;
pub mod common;
pub mod destination_dispatch;
pub mod fcfs;
pub mod look;
pub mod n_step_look;
pub mod n_step_scan;
pub mod rolling;
pub mod scan;
pub mod scatter;
pub mod zones;

pub use c_look::CLook;
pub use c_scan::CScan;
pub use destination_dispatch::DestinationDispatch;
pub use fcfs::Fcfs;
pub use look::Look;
pub use n_step_look::NStepLook;
pub use n_step_scan::NStepScan;
pub use rolling::Rolling;
pub use scan::Scan;
pub use scatter::Scatter;

use evsim_algorithm::{AlgorithmRegistry, AlgorithmResult};

/// Register every built-in policy under its stable, lowercase-hyphenated
/// name. Mirrors the source's `load_algorithms` registration step.
pub fn register_all(registry: &mut AlgorithmRegistry) -> AlgorithmResult<()> {
    registry.register("fcfs", || Box::new(Fcfs::new()))?;
    registry.register("scan", || Box::new(Scan::new()))?;
    registry.register("look", || Box::new(Look::new()))?;
    registry.register("c-scan", || Box::new(CScan::new()))?;
    registry.register("c-look", || Box::new(CLook::new()))?;
    registry.register("n-step-scan", || Box::new(NStepScan::new()))?;
    registry.register("n-step-look", || Box::new(NStepLook::new()))?;
    registry.register("rolling", || Box::new(Rolling::new()))?;
    registry.register("scatter", || Box::new(Scatter::new()))?;
    registry.register("destination-dispatch", || Box::new(DestinationDispatch::new()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registers_all_ten_without_collision() {
        let mut reg = AlgorithmRegistry::default();
        register_all(&mut reg).expect("no duplicate names among built-ins");
        assert_eq!(reg.names().len(), 10);
    }

    #[test]
    fn every_registered_name_builds() {
        let mut reg = AlgorithmRegistry::default();
        register_all(&mut reg).unwrap();
        for name in reg.names() {
            assert!(reg.build(name).is_ok());
        }
    }
}
