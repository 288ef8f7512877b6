pub mod iatf_wizard;

pub use iatf_wizard::{IatfWizard, TOTAL_STEPS};
