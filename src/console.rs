//! Emoji status lines
//!
//! All operator-facing output uses a small fixed marker vocabulary so
//! the modes read consistently. Diagnostics go to `tracing` instead.

use colored::Colorize;
use std::fmt::Display;

pub fn success(msg: impl Display) {
    println!("{} {msg}", "✅".green());
}

pub fn error(msg: impl Display) {
    println!("{} {msg}", "❌".red());
}

pub fn warning(msg: impl Display) {
    println!("{} {msg}", "⚠️".yellow());
}

pub fn info(msg: impl Display) {
    println!("ℹ️  {msg}");
}

pub fn target(msg: impl Display) {
    println!("🎯 {msg}");
}

pub fn fire(msg: impl Display) {
    println!("🔥 {msg}");
}

pub fn search(msg: impl Display) {
    println!("🔍 {msg}");
}

pub fn note(msg: impl Display) {
    println!("📋 {msg}");
}
