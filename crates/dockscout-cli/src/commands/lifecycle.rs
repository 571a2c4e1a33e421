//! Lifecycle commands: start, stop, restart, attach, logs, inspect,
//! stats, rm, exec, bash

use anyhow::Result;
use dockscout_core::ActionDispatcher;

/// Background actions are submitted fire-and-forget; print one line so
/// the user knows the command went out.
fn submitted(action: &str, name: &str) {
    println!("Submitted {} for '{}'", action, name);
}

pub async fn start(dispatcher: &ActionDispatcher, name: &str) -> Result<()> {
    dispatcher.start(name).await?;
    submitted("start", name);
    Ok(())
}

pub async fn stop(dispatcher: &ActionDispatcher, name: &str) -> Result<()> {
    dispatcher.stop(name).await?;
    submitted("stop", name);
    Ok(())
}

pub async fn restart(dispatcher: &ActionDispatcher, name: &str) -> Result<()> {
    dispatcher.restart(name).await?;
    submitted("restart", name);
    Ok(())
}

pub async fn attach(dispatcher: &ActionDispatcher, name: &str) -> Result<()> {
    println!("Attaching to '{}' (detach with Ctrl-P Ctrl-Q)...", name);
    dispatcher.attach(name).await?;
    Ok(())
}

pub async fn logs(dispatcher: &ActionDispatcher, name: &str) -> Result<()> {
    dispatcher.logs(name).await?;
    Ok(())
}

pub async fn inspect(dispatcher: &ActionDispatcher, name: &str) -> Result<()> {
    dispatcher.inspect(name).await?;
    submitted("inspect", name);
    Ok(())
}

pub async fn stats(dispatcher: &ActionDispatcher, name: &str) -> Result<()> {
    dispatcher.stats(name).await?;
    submitted("stats", name);
    Ok(())
}

pub async fn remove(dispatcher: &ActionDispatcher, name: &str) -> Result<()> {
    dispatcher.remove(name).await?;
    submitted("remove", name);
    Ok(())
}

pub async fn exec(dispatcher: &ActionDispatcher, name: &str) -> Result<()> {
    dispatcher.exec_command(name).await?;
    submitted("exec", name);
    Ok(())
}

pub async fn bash(dispatcher: &ActionDispatcher, name: &str) -> Result<()> {
    dispatcher.exec_bash(name).await?;
    Ok(())
}

pub async fn get(dispatcher: &ActionDispatcher, name: &str) -> Result<()> {
    dispatcher.get(name).await?;
    submitted("describe", name);
    Ok(())
}
