use crate::client::{Book, ClientError, KioskClient};
use crate::kiosk::{Command, Kiosk, KioskState, PendingRequest, SearchAction, AUTO_RESET, SEARCH_LIMIT};
use std::io::Write;
use std::time::Duration;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader, Lines};
use tokio::time::{sleep, sleep_until, Instant};
use tracing::{debug, info};

const PROGRESS_WIDTH: usize = 30;
/// The progress bar fills within this time, whatever the preparation delay.
const PROGRESS_DURATION: Duration = Duration::from_secs(1);

/// ANSI foreground code for a `from-<color>-600 to-<color>-800` gradient token.
fn ansi_color(gradient: &str) -> &'static str {
    let color = gradient
        .strip_prefix("from-")
        .and_then(|rest| rest.split('-').next())
        .unwrap_or_default();

    match color {
        "red" | "rose" | "pink" | "orange" => "\x1b[31m",
        "green" | "teal" => "\x1b[32m",
        "amber" | "yellow" => "\x1b[33m",
        "blue" | "indigo" => "\x1b[34m",
        "purple" | "violet" => "\x1b[35m",
        "cyan" => "\x1b[36m",
        _ => "\x1b[37m",
    }
}

fn render_book(index: usize, book: &Book) {
    println!(
        "  {}{}. {}\x1b[0m - {}",
        ansi_color(&book.color_gradient),
        index + 1,
        book.title,
        book.author
    );
    match &book.description {
        Some(description) => println!("     {} | {}", book.genre, description),
        None => println!("     {}", book.genre),
    }
    println!("     Rafta: {} kopya", book.available_copies);
}

fn render(kiosk: &Kiosk) {
    println!();
    println!("🤖 {}", kiosk.message());

    if let Some(message) = kiosk.error_message() {
        if kiosk.state() != KioskState::NoRecommendations {
            println!("⚠️  {}", message);
        }
    }

    if !kiosk.search_query().is_empty() {
        println!("🔎 {}", kiosk.search_query());
    }

    for (index, book) in kiosk.displayed_books().iter().enumerate() {
        render_book(index, book);
    }

    let hint = match kiosk.state() {
        KioskState::Greeting => "[Enter/evet] öneri al · [ara <metin>] kitap ara · [çıkış]",
        KioskState::AskFavorites => "Favori kitaplarınızı yazın · [geri] ana ekran",
        KioskState::Preparing => "",
        KioskState::ShowBooks => "[başka] başka öneri · [ara <metin>] kitap ara · [ana] ana ekran",
        KioskState::NoRecommendations => "[tekrar] yeniden dene · [ana] ana ekran",
    };
    if !hint.is_empty() {
        println!("{}", hint);
    }
    if kiosk.state().auto_resets() {
        println!("({} saniye içinde ana ekrana dönülecek)", AUTO_RESET.as_secs());
    }
}

async fn show_progress(delay: Duration) {
    let step = PROGRESS_DURATION / PROGRESS_WIDTH as u32;
    for filled in 1..=PROGRESS_WIDTH {
        sleep(step).await;
        print!(
            "\r[{}{}] {:>3}%",
            "#".repeat(filled),
            " ".repeat(PROGRESS_WIDTH - filled),
            filled * 100 / PROGRESS_WIDTH
        );
        if let Err(e) = std::io::stdout().flush() {
            debug!("Failed to flush progress bar: {}", e);
        }
    }
    println!();

    if let Some(rest) = delay.checked_sub(PROGRESS_DURATION) {
        sleep(rest).await;
    }
}

async fn prepare(kiosk: &mut Kiosk, client: &KioskClient, pending: PendingRequest) {
    debug!(
        "Preparing {:?} request, {} books already shown",
        pending.kind,
        kiosk.used_book_ids().len()
    );
    render(kiosk);
    show_progress(pending.delay).await;

    let result = client
        .recommendations(&pending.user_input, &pending.exclude_ids)
        .await;
    if let Err(e) = &result {
        debug!("Recommendation request error: {}", e);
    }
    kiosk.finish_preparing(pending.kind, result);
}

async fn search(kiosk: &mut Kiosk, client: &KioskClient, query: &str) {
    if let SearchAction::Fetch(query) = kiosk.search(query) {
        let result: Result<Vec<Book>, ClientError> = client.search(&query, SEARCH_LIMIT).await;
        kiosk.apply_search_results(result);
    }
}

/// Deadline for the automatic return to the greeting.
///
/// The countdown starts when the kiosk enters a result state and is not
/// pushed back by input handled inside that state. `entered` marks a fresh
/// entry even when the state name did not change (a new set of results).
fn reset_deadline(
    current: Option<Instant>,
    before: KioskState,
    after: KioskState,
    entered: bool,
) -> Option<Instant> {
    if !after.auto_resets() {
        return None;
    }
    match current {
        Some(deadline) if before == after && !entered => Some(deadline),
        _ => Some(Instant::now() + AUTO_RESET),
    }
}

/// Runs the kiosk until the user quits or stdin closes.
pub async fn run(client: &KioskClient) -> std::io::Result<()> {
    let mut kiosk = Kiosk::new();
    let lines = BufReader::new(tokio::io::stdin()).lines();

    drive(&mut kiosk, client, lines).await
}

/// Feeds `lines` to the kiosk until the user quits or the input closes.
pub async fn drive<R>(kiosk: &mut Kiosk, client: &KioskClient, mut lines: Lines<R>) -> std::io::Result<()>
where
    R: AsyncBufRead + Unpin,
{
    let mut deadline = reset_deadline(None, kiosk.state(), kiosk.state(), true);

    render(kiosk);

    loop {
        let line = match deadline {
            Some(at) => {
                tokio::select! {
                    line = lines.next_line() => line?,
                    _ = sleep_until(at) => {
                        info!("Countdown of {}s elapsed, returning to greeting", AUTO_RESET.as_secs());
                        kiosk.reset();
                        deadline = None;
                        render(kiosk);
                        continue;
                    }
                }
            }
            None => lines.next_line().await?,
        };

        let Some(line) = line else {
            info!("Input closed, shutting down kiosk");
            return Ok(());
        };

        let before = kiosk.state();
        let mut entered = false;

        match Command::parse(before, &line) {
            Command::Quit => return Ok(()),
            Command::Home => kiosk.reset(),
            Command::Start => kiosk.start_recommendation(),
            Command::Favorites(text) => {
                if let Some(pending) = kiosk.submit_favorites(&text) {
                    prepare(kiosk, client, pending).await;
                    entered = true;
                }
            }
            Command::Alternative => {
                if let Some(pending) = kiosk.request_alternative() {
                    prepare(kiosk, client, pending).await;
                    entered = true;
                }
            }
            Command::Search(query) => search(kiosk, client, &query).await,
            Command::Unknown => {
                println!("Anlayamadım, lütfen tekrar deneyin.");
                continue;
            }
        }

        deadline = reset_deadline(deadline, before, kiosk.state(), entered);
        render(kiosk);
    }
}
