use campusroom::{
    config::Config,
    error::AppError,
    model::room::{RoomKind, UNKNOWN_LABEL},
    service::{room::RoomService, slot::SlotService},
    startup,
    state::AppState,
    util::parse::today,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    startup::init_logging();

    let db = startup::connect_to_database(&config).await?;
    let state = AppState::new(db, &config);

    tracing::info!(
        "Reservation engine ready ({} daily slots, email notifications {})",
        state.slot_grid.slots().len(),
        if config.email_notifications { "on" } else { "off" }
    );

    let date = today();
    let rooms = RoomService::new(&state.db);
    let slots = SlotService::new(&state.db, &state.slot_grid);

    for kind in [RoomKind::Classroom, RoomKind::StudyRoom] {
        for room in rooms.list(kind).await? {
            let board = slots.list_time_slots(&room, date).await?;
            let free = board.iter().filter(|slot| slot.available).count();
            tracing::info!(
                "{} ({}) on {}: {}/{} slots free",
                room.reference,
                room.name,
                date,
                free,
                board.len()
            );
            for slot in board.iter().filter(|slot| !slot.available) {
                tracing::info!(
                    "  {}-{} reserved by {}",
                    slot.start,
                    slot.end,
                    slot.reserved_by.as_deref().unwrap_or(UNKNOWN_LABEL)
                );
            }
        }
    }

    Ok(())
}
