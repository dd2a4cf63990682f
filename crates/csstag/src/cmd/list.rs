use clap::Parser;
use csstag_editor::Command;

#[derive(Debug, Parser)]
pub struct ListCommand {}

pub fn main(_cmd: ListCommand) -> anyhow::Result<()> {
  for command in Command::ALL {
    let premium = if command.premium_feature().is_some() {
      " (premium)"
    } else {
      ""
    };
    println!("* {}{premium}", command.id());
  }

  Ok(())
}
