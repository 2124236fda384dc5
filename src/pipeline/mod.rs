pub mod stage1_load;
pub mod stage2_analyze;
pub mod stage3_report;
