pub mod outputs;
pub mod run;
pub mod status_report;
pub mod sync;
pub mod trigger;
