pub mod cli;
pub mod commands;
pub mod config;
pub mod dataset;
pub mod haplogroup;
pub mod report;
pub mod snp;
