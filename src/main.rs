mod app;
mod audio;
mod config;
mod controller;
mod error;
mod mpris;
mod playlist;
mod runtime;
mod ui;
mod view;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    runtime::run()
}
