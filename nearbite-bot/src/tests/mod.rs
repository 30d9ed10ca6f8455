//! Shared test harness modules for the Nearbite bot.

use super::*;

mod helpers;
