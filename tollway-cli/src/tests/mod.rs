//! Shared test harness modules for the Tollway CLI.

use super::*;
use crate::optimize::{
    OptimizeConfig, config_from_layers_for_test, execute_optimize, load_request,
    run_optimize_with,
};

mod helpers;
