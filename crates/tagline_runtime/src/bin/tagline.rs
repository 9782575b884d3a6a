//! Tagline demo console.
//!
//! Registers a few sample commands over an in-memory directory and routes
//! typed lines through the dispatcher, prompting interactively when a
//! required argument is missing.

use std::env;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use tagline_foundation::{ChannelId, GuildId, Member, Message, MessageId, Role, RoleId, UserId};
use tagline_prompt::{PromptOptions, SessionOutcome};
use tagline_resolver::{MemoryDirectory, ResolverRegistry};
use tagline_runtime::{
    Command, CommandRegistry, ConsoleMessenger, DispatchOutcome, Dispatcher, PrefixChain,
    ReadResult,
};

const DEMO_GUILD: GuildId = GuildId::new(1);
const DEMO_CHANNEL: ChannelId = ChannelId::new(1);
const DEMO_USER: UserId = UserId::new(1);

fn main() -> ExitCode {
    match run(env::args().collect()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\x1b[31mError: {e}\x1b[0m");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Vec<String>) -> Result<(), Box<dyn std::error::Error>> {
    for arg in &args[1..] {
        match arg.as_str() {
            "-h" | "--help" => {
                print_help();
                return Ok(());
            }
            "-V" | "--version" => {
                println!("tagline {}", env!("CARGO_PKG_VERSION"));
                return Ok(());
            }
            other => return Err(format!("unknown option: {other}").into()),
        }
    }

    let resolvers = ResolverRegistry::new(Arc::new(demo_directory()));
    let dispatcher = Dispatcher::new(demo_commands(&resolvers)?, PrefixChain::new().custom("!"));
    let console = ConsoleMessenger::new()?;

    println!("tagline demo console. Commands: !kick, !prune, !say. Ctrl+D exits.");
    let mut next_id: u64 = 1;
    loop {
        let line = match console.read_line("tagline> ")? {
            ReadResult::Line(line) => line,
            ReadResult::Interrupted => continue,
            ReadResult::Eof => break,
        };
        if line.trim().is_empty() {
            continue;
        }

        let message = Message::new(
            MessageId::new(next_id),
            DEMO_USER,
            DEMO_CHANNEL,
            DEMO_GUILD,
            line,
        );
        next_id += 1;

        match dispatcher.dispatch(&message, &resolvers, &console) {
            DispatchOutcome::Ignored => println!("(not a command; try !say hello)"),
            DispatchOutcome::Unknown { word } => println!("unknown command: {word}"),
            DispatchOutcome::Ran {
                command, outcome, ..
            } => report(&command, &outcome),
        }
    }

    println!("\nGoodbye!");
    Ok(())
}

fn report(command: &str, outcome: &SessionOutcome) {
    match outcome {
        SessionOutcome::Completed(args) => {
            println!("{command}:");
            for (i, value) in args.params.iter().enumerate() {
                println!("  arg {i}: {value}");
            }
            for (name, flag) in &args.flags {
                match flag.value() {
                    Some(v) => println!("  flag {name} = {v}"),
                    None => println!("  flag {name}"),
                }
            }
        }
        SessionOutcome::AbortedLimit { reason } | SessionOutcome::AbortedExternal { reason } => {
            println!("{command} aborted: {reason}");
        }
    }
}

/// A couple of members and a role so `member`/`role` arguments resolve.
fn demo_directory() -> MemoryDirectory {
    let mut directory = MemoryDirectory::new();
    directory.insert_member(Member {
        user: UserId::new(266_624_760_782_258_186),
        guild: DEMO_GUILD,
        display_name: "someone".into(),
    });
    directory.insert_member(Member {
        user: UserId::new(267_000_000_000_000_001),
        guild: DEMO_GUILD,
        display_name: "someone-else".into(),
    });
    directory.insert_role(Role {
        id: RoleId::new(312_312_312_312_312_312),
        guild: DEMO_GUILD,
        name: "mods".into(),
    });
    directory
}

fn demo_commands(
    resolvers: &ResolverRegistry,
) -> Result<CommandRegistry, Box<dyn std::error::Error>> {
    let interactive = PromptOptions::default()
        .limit(3)
        .time(Duration::from_secs(60));

    let mut commands = CommandRegistry::new();
    commands.register(
        Command::new("kick", "<member:member> [reason:string]", None)?
            .options(interactive)
            .respond("member", "Who should I kick? Mention them or give their id.")?,
        resolvers,
    )?;
    commands.register(
        Command::new("prune", "<count:integer{1,100}>", None)?
            .alias("purge")
            .options(interactive),
        resolvers,
    )?;
    commands.register(
        Command::new("say", "<text:string> [...]", None)?
            .options(PromptOptions::default().quoted_strings(true)),
        resolvers,
    )?;
    Ok(commands)
}

fn print_help() {
    println!(
        "\x1b[1mtagline\x1b[0m - usage-grammar argument prompting demo

\x1b[1mUSAGE:\x1b[0m
    tagline [OPTIONS]

\x1b[1mOPTIONS:\x1b[0m
    -h, --help       Print help information
    -V, --version    Print version information

\x1b[1mCONSOLE COMMANDS:\x1b[0m
    !kick <member> [reason]    Resolve a member plus free-text reason
    !prune <count>             Integer bounded to 1..=100
    !say <text> [...]          Repeating text, quoted strings supported
    Ctrl+D                     Exit

Known member id: 266624760782258186 (try `!kick <@266624760782258186> being rude`)"
    );
}
