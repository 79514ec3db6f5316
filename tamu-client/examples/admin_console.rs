//! Interactive guest admin console
//!
//! Lists, filters, edits and shares wedding invitations from a terminal,
//! driving the guest-list engine against a running backend.
//!
//! Run: cargo run --example admin_console

use anyhow::Result;
use std::io::{self, Write};
use tamu_client::{
    Clipboard, ClientConfig, ClientResult, EventConfig, GuestCreate, GuestFilter, GuestListEngine,
    InvitationTemplates, VARIANT_FAMILY, VARIANT_GUEST,
};

/// Clipboard that prints the copied text, for terminals without an OS
/// clipboard. Desktop shells plug their own implementation in here.
struct ConsoleClipboard;

impl Clipboard for ConsoleClipboard {
    fn write_text(&self, text: &str) -> ClientResult<()> {
        println!("\n----- copied -----\n{text}\n------------------");
        Ok(())
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    println!("\n💍 Guest Admin Console");
    println!("======================\n");

    let base_url = get_input_with_default(
        "Backend URL",
        &std::env::var("TAMU_BASE_URL")
            .unwrap_or_else(|_| "http://localhost:5000/api/wedding/v1".to_string()),
    );

    let event = EventConfig::new(
        get_input_with_default("Event title", "Wulan Asri & Diaz Raviv"),
        get_input_with_default("Maps link", "https://maps.example/venue"),
        get_input_with_default("Group link base", "https://invite.example/group"),
    )
    .with_guest_signature(get_input_with_default("Guest signature", "Wulan & Diaz"))
    .with_family_signature(get_input_with_default(
        "Family signature",
        "Kel. Bpk Dharma & Kel. Bpk Nur",
    ));

    let http = ClientConfig::new(base_url).build_http_client();
    let mut engine = GuestListEngine::new(http, InvitationTemplates::new(event)?);

    println!("Fetching guest list...");
    engine.refresh().await?;
    println!("✅ {} guests loaded.\n", engine.guests().len());

    loop {
        println!(
            "\nCommands: list | stats | groups | filter | reset | add | copy <id> | copy-family <id> | copy-group <group> | delete <id> | refresh | quit"
        );
        let line = get_input("> ");
        let mut parts = line.splitn(2, ' ');
        let command = parts.next().unwrap_or("");
        let arg = parts.next().unwrap_or("").trim();

        let outcome = match command {
            "list" => {
                print_guests(&engine);
                Ok(())
            }
            "stats" => {
                print_stats(&engine);
                Ok(())
            }
            "groups" => {
                println!("Groups: {}", engine.group_names().join(", "));
                Ok(())
            }
            "filter" => {
                let filter = GuestFilter::default()
                    .with_name(get_input_with_default("Name contains", ""))
                    .with_group(get_input_with_default("Group", ""))
                    .with_origin(get_input_with_default("Origin", ""));
                let filter = match get_input_with_default("Shared? (yes/no/all)", "all").as_str() {
                    "yes" => filter.with_shared(true),
                    "no" => filter.with_shared(false),
                    _ => filter,
                };
                engine.set_filter(filter);
                print_guests(&engine);
                Ok(())
            }
            "reset" => {
                engine.reset_filter();
                Ok(())
            }
            "add" => {
                let payload = GuestCreate {
                    guest_name: get_input("Guest name: "),
                    group_name: non_empty(get_input_with_default("Group", "")),
                    origin: non_empty(get_input_with_default("Origin", "")),
                    pax_count: get_input_with_default("Pax", "1").parse().unwrap_or(1),
                };
                engine.create_guest(&payload).await.map(|created| {
                    println!("✅ Created {} ({})", created.guest_name, created.invitation_id);
                })
            }
            "copy" => engine
                .copy_invitation(arg, VARIANT_GUEST, &ConsoleClipboard)
                .await
                .map(|_| ()),
            "copy-family" => engine
                .copy_invitation(arg, VARIANT_FAMILY, &ConsoleClipboard)
                .await
                .map(|_| ()),
            "copy-group" => engine
                .copy_group_link(arg, &ConsoleClipboard)
                .await
                .map(|_| ()),
            "delete" => engine.delete_guest(arg).await,
            "refresh" => engine.refresh().await,
            "quit" | "exit" => break,
            "" => Ok(()),
            other => {
                println!("Unknown command: {other}");
                Ok(())
            }
        };

        if let Err(e) = outcome {
            println!("❌ {e}");
        }
    }

    Ok(())
}

fn print_guests<S: tamu_client::GuestService>(engine: &GuestListEngine<S>) {
    for (index, guest) in engine.filtered_guests().iter().enumerate() {
        println!(
            "{:>3}. [{}] {} | group: {} | pax: {} | shared: {} | {}",
            index + 1,
            guest.invitation_id,
            guest.guest_name,
            guest.group_name.as_deref().unwrap_or("-"),
            guest.pax_count,
            if guest.has_shared_invitation { "yes" } else { "no" },
            if guest.has_responded() {
                match guest.is_attending {
                    Some(true) => "attending",
                    Some(false) => "not attending",
                    None => "checked in",
                }
            } else {
                "not responded"
            },
        );
    }
}

fn print_stats<S: tamu_client::GuestService>(engine: &GuestListEngine<S>) {
    let stats = engine.stats();
    println!(
        "Invitees: {} / {} ({}%)",
        stats.attended_invitees,
        stats.total_invitees,
        stats.invitee_percent()
    );
    println!(
        "Pax:      {} / {} ({}%)",
        stats.attended_pax,
        stats.total_pax,
        stats.pax_percent()
    );
}

fn non_empty(input: String) -> Option<String> {
    (!input.is_empty()).then_some(input)
}

fn get_input(prompt: &str) -> String {
    print!("{prompt}");
    io::stdout().flush().unwrap();
    let mut input = String::new();
    io::stdin().read_line(&mut input).unwrap();
    input.trim().to_string()
}

fn get_input_with_default(prompt: &str, default: &str) -> String {
    let input = get_input(&format!("{prompt} [{default}]: "));
    if input.is_empty() {
        default.to_string()
    } else {
        input
    }
}
