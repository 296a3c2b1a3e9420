// CLASSIFICATION: COMMUNITY
// Filename: modhost.rs v0.1
// Author: Lukas Bower
// Date Modified: 2026-08-01

//! Minimal host application driving one module through its lifecycle.

use cohmod::{LifecycleHooks, ModuleHandle};
use log::info;

struct DemoModule;

impl LifecycleHooks for DemoModule {
    fn name(&self) -> &'static str {
        "demo"
    }

    fn did_init(&mut self) {
        info!("demo module ready");
    }
}

fn main() {
    env_logger::init();
    let mut demo = DemoModule;
    let mut handle = ModuleHandle::new();
    if let Err(e) = handle.init_with(&mut demo) {
        eprintln!("[modhost] init failed: {e}");
        std::process::exit(1);
    }
    println!("[modhost] module in service");
    if let Err(e) = handle.deinit_with(&mut demo) {
        eprintln!("[modhost] deinit failed: {e}");
        std::process::exit(1);
    }
    println!("[modhost] module released");
}
