//! Daily Flow Demo
//!
//! Walks one simulated week: each day the user submits colors, mood, and
//! style, completes three missions, and the day's creature is registered.
//! Shows streak progression, the rare-variant reward on day seven, roster
//! leveling, and an explicit evolution.

use dailydex_core::{
    bonus_draw, level_up, recommend, CreatureSnapshot, DailyRng, DailyState, DateKey, Deck,
    DeckEntry, Dex, DexEntry, EvolutionEngine, Mood, StyleTag, UserInput, DECK_CAPACITY,
    FIRST_EVOLUTION_LEVEL, MISSION_COUNT,
};

fn main() {
    tracing_subscriber::fmt().init();

    println!("=== Dailydex Daily Flow Demo ===\n");

    let catalog = dailydex_catalog::builtin();
    let store = dailydex_db::Store::in_memory().expect("open in-memory store");

    let mut dex = Dex::new();
    let mut deck = Deck::new();
    let mut streak = store.load_streak().expect("load streak");

    let mut date = DateKey::parse("2025-01-01").expect("valid start date");

    println!(
        "Catalog has {} creatures. Starting on {}.\n",
        catalog.len(),
        date
    );

    for day in 1..=7 {
        let input = UserInput {
            main_color: "#FF6B6B".to_string(),
            sub_color: "#48DBFB".to_string(),
            mood: Mood::Excited,
            mood_note: None,
            style_tags: vec![StyleTag::Sporty],
        };

        let rec = recommend(&catalog, &input, &dex.collected_ids(), &date);
        let Some(creature) = rec.creature else {
            println!("Collection complete, nothing left to meet!");
            break;
        };
        println!("Day {} ({}): met {} {}", day, date, creature.id, creature.name);
        println!("  \"{}\"", creature.flavor);

        let mut daily = DailyState::new(
            date,
            input,
            [
                "Drink 2L of water".to_string(),
                "Walk 30 minutes".to_string(),
                "Read 10 pages".to_string(),
            ],
            CreatureSnapshot::from_def(creature),
        );

        for i in 0..MISSION_COUNT {
            daily.set_mission_done(i, true);
        }

        let rewarded = streak.on_all_missions_complete(date);
        if rewarded {
            daily.mark_shiny();
            println!("  Seven-day streak! This one is the rare variant.");
        }
        store.record_streak(&streak);

        let entry = DexEntry::new(creature.id, daily.shiny, chrono::Utc::now(), date);
        if dex.register(entry.clone()) {
            store.record_dex_entry(&entry);
            daily.mark_registered();
            println!("  Registered into the collection ({} so far).", dex.len());

            if !deck.is_full() {
                deck.add(DeckEntry::new(creature.id, date))
                    .expect("deck has room");
                println!("  Added to the roster ({}/{}).", deck.len(), DECK_CAPACITY);
            }
        }

        store.record_daily(&daily);
        store.record_deck(deck.entries());
        date = date.next_day();
    }

    // Level the first roster creature into its evolution window, then
    // evolve it.
    let engine = EvolutionEngine::new(&catalog);
    if let Some(first_id) = deck.entries().first().map(|e| e.caught_id) {
        if let Some(entry) = deck.get_mut(first_id) {
            while entry.level < FIRST_EVOLUTION_LEVEL {
                level_up(entry);
            }
            println!(
                "\nRoster creature {} reached Lv.{}.",
                entry.caught_id, entry.level
            );

            let mut rng = DailyRng::for_date(&date);
            match engine.evolve_in_deck(entry, &mut rng) {
                Some(evo) => {
                    let name = catalog
                        .get(evo.to)
                        .map(|d| d.name.as_str())
                        .unwrap_or("???");
                    println!("{} evolved into {} (stage {})!", evo.from, name, evo.stage);
                }
                None => println!("{} has no evolution available.", first_id),
            }
        }
        store.record_deck(deck.entries());
    }

    // One referral bonus: a uniformly random catch among whatever is
    // still missing.
    let mut rng = DailyRng::for_date(&date);
    if let Some(bonus) = bonus_draw(&catalog, &dex.collected_ids(), &mut rng) {
        println!("\nBonus catch: {} {}", bonus.id, bonus.name);
        let entry = DexEntry::new(bonus.id, false, chrono::Utc::now(), date);
        if dex.register(entry.clone()) {
            store.record_dex_entry(&entry);
        }
    }

    println!(
        "\nCollected {}/{} creatures after one week.",
        dex.len(),
        catalog.len()
    );
}
