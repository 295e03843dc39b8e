/// End-to-end flow: question -> shuffled deck -> picks -> reveal -> reading.

use rand::rngs::StdRng;
use rand::SeedableRng;

use tarot_core::cards::{Catalog, TarotCard};
use tarot_core::reading;
use tarot_core::session::{Page, Session, SessionAction};
use tarot_core::shuffle::shuffled;
use tarot_core::spread::SpreadPicks;

#[test]
fn full_reading_flow_draws_in_flip_order() {
    let catalog = Catalog::embedded().unwrap();
    let mut rng = StdRng::seed_from_u64(7);
    let deck = shuffled(catalog.cards(), &mut rng);

    // Landing: submit the question.
    let session = Session::new().apply(SessionAction::SubmitQuestion("A".to_string()));
    assert_eq!(session.page, Page::Selection);

    // Selection: flip shuffled positions 2, 5, 0 in that order.
    let mut picks = SpreadPicks::new();
    for i in [2usize, 5, 0] {
        assert!(picks.toggle(i));
    }
    let drawn: Vec<TarotCard> = picks
        .as_slice()
        .iter()
        .map(|&i| deck[i].clone())
        .collect();
    let session = session.apply(SessionAction::RevealSpread(drawn));
    assert_eq!(session.page, Page::Reading);
    assert_eq!(
        session.drawn,
        vec![deck[2].clone(), deck[5].clone(), deck[0].clone()]
    );

    // Reading: the generated text quotes the question and names the cards
    // in flip order of first appearance.
    let cards: [TarotCard; 3] = session.drawn.clone().try_into().unwrap();
    let text = reading::generate(&session.question, &cards);
    assert!(text.contains("A"));
    let first = text.find(&deck[2].name).unwrap();
    let second = text.find(&deck[5].name).unwrap();
    let third = text.find(&deck[0].name).unwrap();
    assert!(first < second && second < third);

    // Restart clears everything.
    let fresh = session.apply(SessionAction::Restart);
    assert_eq!(fresh, Session::new());
    assert_eq!(fresh.question, "");
    assert!(fresh.drawn.is_empty());
}

#[test]
fn unflipping_mid_selection_relabels_the_spread() {
    let catalog = Catalog::embedded().unwrap();
    let mut rng = StdRng::seed_from_u64(3);
    let deck = shuffled(catalog.cards(), &mut rng);

    let mut picks = SpreadPicks::new();
    for i in [10usize, 11, 12] {
        picks.toggle(i);
    }
    // Change of heart about the middle card.
    picks.toggle(11);
    picks.toggle(20);
    assert_eq!(picks.as_slice(), &[10, 12, 20]);

    let drawn: Vec<TarotCard> = picks.as_slice().iter().map(|&i| deck[i].clone()).collect();
    let session = Session::new()
        .apply(SessionAction::SubmitQuestion("何去何从".to_string()))
        .apply(SessionAction::RevealSpread(drawn));
    let ids: Vec<u32> = session.drawn.iter().map(|c| c.id).collect();
    assert_eq!(
        ids,
        vec![deck[10].id, deck[12].id, deck[20].id]
    );
}
