use std::io::{self, BufRead, Write};

use tracing_subscriber::EnvFilter;
use wpath_kit::{MapNS, Namespace, Session};

fn main() -> wpath_kit::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    // a small category tree to walk around in
    let mut ns = MapNS::new();
    ns.mkdir(["films", "sci/fi"])?;
    ns.mkdir(["films", "drama"])?;
    ns.mkdir(["music", "aa / aa"])?;
    ns.set_title(&[String::from("films")], Some("Moving pictures"))?;

    let mut session = Session::new(ns);
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        write!(stdout, "{}> ", session.pwd())?;
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim_end_matches(['\r', '\n']);
        let (command, arg) = line.split_once(' ').unwrap_or((line, ""));

        let result = match command {
            "cd" => session.cd(arg),
            "pwd" => {
                println!("{}", session.pwd());
                Ok(())
            }
            "ls" => session.ls_titled().map(|names| {
                for name in names {
                    println!("{}", name);
                }
            }),
            "tree" => session
                .namespace()
                .tree(session.working_path().get())
                .map(|paths| {
                    let depth = session.working_path().depth();
                    for split_path in paths {
                        let indent = "  ".repeat(split_path.len() - depth - 1);
                        println!("{}{}", indent, split_path.last().map_or("", String::as_str));
                    }
                }),
            "mkdir" => {
                let mut split_path = session.working_path().get().to_vec();
                split_path.push(arg.to_string());
                session.namespace_mut().mkdir(split_path)
            }
            "exit" | "quit" => break,
            "" => Ok(()),
            other => {
                eprintln!("unknown command: {}", other);
                Ok(())
            }
        };
        if let Err(e) = result {
            eprintln!("{}", e);
        }
    }
    Ok(())
}
