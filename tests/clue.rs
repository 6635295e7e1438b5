use std::collections::HashMap;

use otter_logic::{config::Config, context::Context, reports::Report, structures::sentence::Sentence};

/// Exactly one of `options` is true.
fn exactly_one(options: &[Sentence]) -> Vec<Sentence> {
    let mut sentences = vec![Sentence::or(options.iter().cloned())];
    for (index, first) in options.iter().enumerate() {
        for second in &options[index + 1..] {
            sentences.push(!(first.clone() & second.clone()));
        }
    }
    sentences
}

fn cards<const N: usize>(names: [&str; N]) -> [Sentence; N] {
    names.map(|name| Sentence::symbol(name).unwrap())
}

fn undetermined(reports: &HashMap<Sentence, Report>) -> usize {
    reports
        .values()
        .filter(|report| **report == Report::Undetermined)
        .count()
}

#[test]
fn envelope_is_deduced_incrementally() {
    let [mustard, plum, scarlet] = cards(["ColMustard", "ProfPlum", "MsScarlet"]);
    let [ballroom, kitchen, library] = cards(["ballroom", "kitchen", "library"]);
    let [knife, revolver, wrench] = cards(["knife", "revolver", "wrench"]);

    let suspects = [mustard.clone(), plum.clone(), scarlet.clone()];
    let rooms = [ballroom.clone(), kitchen.clone(), library.clone()];
    let weapons = [knife.clone(), revolver.clone(), wrench.clone()];

    let all = suspects
        .iter()
        .chain(rooms.iter())
        .chain(weapons.iter())
        .cloned()
        .collect::<Vec<_>>();

    let mut the_context = Context::from_config(Config::default());
    for category in [&suspects, &rooms, &weapons] {
        for sentence in exactly_one(category) {
            assert!(the_context.add(sentence).is_ok());
        }
    }

    let increments = vec![
        vec![!plum.clone(), !ballroom.clone()],
        vec![!mustard.clone(), !kitchen.clone()],
        vec![!revolver.clone()],
        vec![Sentence::or([!scarlet.clone(), !library.clone(), !wrench.clone()])],
    ];

    let classify = |the_context: &mut Context| -> HashMap<Sentence, Report> {
        the_context
            .classify_all(&all)
            .unwrap()
            .into_iter()
            .map(|(symbol, report)| (symbol.clone(), report))
            .collect()
    };

    let mut previous = classify(&mut the_context);
    assert_eq!(undetermined(&previous), 9);

    let mut undetermined_counts = vec![undetermined(&previous)];

    for increment in increments {
        for sentence in increment {
            assert!(the_context.add(sentence).is_ok());
        }

        let current = classify(&mut the_context);

        for (symbol, report) in &previous {
            assert_ne!(current[symbol], Report::Inconsistent);
            if report.is_determined() {
                assert_eq!(current[symbol], *report, "{symbol} regressed");
            }
        }

        assert!(undetermined(&current) < undetermined(&previous));
        undetermined_counts.push(undetermined(&current));
        previous = current;
    }

    assert_eq!(undetermined_counts, vec![9, 7, 3, 2, 0]);

    for card in [&scarlet, &library, &knife] {
        assert_eq!(previous[card], Report::Present);
    }
    for card in [&mustard, &plum, &ballroom, &kitchen, &revolver, &wrench] {
        assert_eq!(previous[card], Report::Absent);
    }
}

#[test]
fn envelope_with_some_of_each() {
    // Only 'some' of each category, as opposed to 'exactly one'.
    let [mustard, plum, scarlet] = cards(["ColMustard", "ProfPlum", "MsScarlet"]);
    let [ballroom, kitchen, library] = cards(["ballroom", "kitchen", "library"]);
    let [knife, revolver, wrench] = cards(["knife", "revolver", "wrench"]);

    let mut the_context = Context::from_knowledge(
        Config::default(),
        Sentence::and([
            Sentence::or([mustard.clone(), plum.clone(), scarlet.clone()]),
            Sentence::or([ballroom.clone(), kitchen.clone(), library.clone()]),
            Sentence::or([knife.clone(), revolver.clone(), wrench.clone()]),
        ]),
    );

    assert_eq!(
        the_context.knowledge().formula(),
        "(ColMustard ∨ ProfPlum ∨ MsScarlet) ∧ (ballroom ∨ kitchen ∨ library) ∧ (knife ∨ revolver ∨ wrench)"
    );

    assert!(the_context.add(!plum.clone()).is_ok());
    assert!(the_context.add(!ballroom.clone()).is_ok());
    assert!(the_context.add(!mustard.clone()).is_ok());

    assert_eq!(the_context.classify(&plum), Ok(Report::Absent));
    assert_eq!(the_context.classify(&scarlet), Ok(Report::Present));
    // Nothing prevents a second room.
    assert_eq!(the_context.classify(&kitchen), Ok(Report::Undetermined));
    assert_eq!(the_context.classify(&library), Ok(Report::Undetermined));
    assert_eq!(the_context.classify(&knife), Ok(Report::Undetermined));
}
