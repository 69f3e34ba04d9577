// travel-client/examples/browse_tours.rs
// Lists available tours, optionally logging in first and narrowing the list locally.
//
// Usage: browse_tours [username password] [search text] [price band]
//   TRAVEL_API_URL      backend base URL (default http://localhost:8080/api)
//   TRAVEL_SESSION_DIR  where the session is persisted (default ./.travel-session)

use shared::{PriceBand, TourQuery};
use travel_client::{ClientConfig, FileStorage, LoginRequest, SessionEvent, TravelClient};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "travel_client=info".into()),
        )
        .init();

    let args: Vec<String> = std::env::args().collect();

    let session_dir =
        std::env::var("TRAVEL_SESSION_DIR").unwrap_or_else(|_| "./.travel-session".to_string());

    let client = TravelClient::builder()
        .config(ClientConfig::from_env())
        .storage(FileStorage::new(&session_dir))
        .build()?;

    // Host-side reaction to session expiry
    let mut events = client.subscribe();
    tokio::spawn(async move {
        while let Ok(event) = events.recv().await {
            if let SessionEvent::Expired { redirect_to } = event {
                tracing::warn!("Session expired, please log in again ({})", redirect_to);
            }
        }
    });

    if args.len() >= 3 {
        let login = client.login(&LoginRequest::new(&args[1], &args[2])).await?;
        tracing::info!("Logged in as: {} ({:?})", login.user.full_name, login.user.role);
    } else if let Some(user) = client.current_user()? {
        tracing::info!("Resuming session of {}", user.username);
    }

    let query = TourQuery::new()
        .text(args.get(3).cloned().unwrap_or_default())
        .price_band(match args.get(4) {
            Some(band) => band.parse()?,
            None => PriceBand::All,
        });

    let tours = client.list_available_tours().await?;
    let matching = query.apply(&tours);

    println!("{} of {} available tours match", matching.len(), tours.len());
    for tour in matching {
        println!(
            "  #{:<4} {:<32} {:<20} {:>10.2}  {} -> {}  ({}/{} seats)",
            tour.id,
            tour.name,
            tour.destination.name,
            tour.price,
            tour.start_date,
            tour.end_date,
            tour.current_capacity,
            tour.max_capacity,
        );
    }

    Ok(())
}
