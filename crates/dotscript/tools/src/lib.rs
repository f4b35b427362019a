// Dotlanth
// Copyright (C) 2025 Synerthink

// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.

// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Affero General Public License for more details.

// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <http://www.gnu.org/licenses/>.

//! DotScript Tools Library
//!
//! Command-line tooling on top of `dotscript-analyzer`: file and stdin input,
//! TOML configuration, text and JSON reports, exit-code gating.

pub mod cli;
pub mod config;

// Re-export main CLI functions for easy access
pub use cli::{Cli, Commands, init_tracing, run};
pub use config::{OutputFormat, ToolConfig};
