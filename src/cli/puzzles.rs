//! Knowledge for a couple of puzzles.

use otter_logic::{structures::sentence::Sentence, types::err};

/// A stage of a puzzle: some sentences to add to the knowledge, with a note on where they came from.
pub struct Stage {
    pub note: &'static str,
    pub sentences: Vec<Sentence>,
}

pub struct Puzzle {
    pub symbols: Vec<Sentence>,
    pub stages: Vec<Stage>,
}

fn symbols(names: &[&str]) -> Result<Vec<Sentence>, err::ErrorKind> {
    names.iter().map(|name| Sentence::symbol(*name)).collect()
}

/// Three suspects, three rooms, and three weapons, one of each in the envelope.
pub fn clue() -> Result<Puzzle, err::ErrorKind> {
    let suspects = symbols(&["ColMustard", "ProfPlum", "MsScarlet"])?;
    let rooms = symbols(&["ballroom", "kitchen", "library"])?;
    let weapons = symbols(&["knife", "revolver", "wrench"])?;

    let [mustard, plum, scarlet] = [&suspects[0], &suspects[1], &suspects[2]];
    let [ballroom, kitchen, library] = [&rooms[0], &rooms[1], &rooms[2]];
    let [revolver, wrench] = [&weapons[1], &weapons[2]];

    let stages = vec![
        Stage {
            note: "Some suspect, in some room, with some weapon",
            sentences: vec![
                Sentence::or(suspects.clone()),
                Sentence::or(rooms.clone()),
                Sentence::or(weapons.clone()),
            ],
        },
        Stage {
            note: "My cards",
            sentences: vec![!plum.clone(), !ballroom.clone()],
        },
        Stage {
            note: "Cards shown to me",
            sentences: vec![!mustard.clone(), !kitchen.clone(), !revolver.clone()],
        },
        Stage {
            note: "A guess which was refuted",
            sentences: vec![Sentence::or([
                !scarlet.clone(),
                !library.clone(),
                !wrench.clone(),
            ])],
        },
    ];

    let mut all = suspects;
    all.extend(rooms);
    all.extend(weapons);

    Ok(Puzzle {
        symbols: all,
        stages,
    })
}

/// Four students, each in a different one of four houses.
pub fn houses() -> Result<Puzzle, err::ErrorKind> {
    let students = ["Gilderoy", "Minerva", "Pomona", "Horace"];
    let houses = ["Gryffindor", "Hufflepuff", "Ravenclaw", "Slytherin"];

    let placed = |student: &str, house: &str| Sentence::symbol(format!("{student}{house}"));

    let mut all = Vec::default();
    let mut rules = Vec::default();

    for student in students {
        let mut somewhere = Sentence::or([]);
        for house in houses {
            all.push(placed(student, house)?);
            somewhere.add(placed(student, house)?)?;

            for other in houses.iter().filter(|other| **other != house) {
                rules.push(placed(student, house)?.implies(!placed(student, *other)?));
            }
        }
        rules.push(somewhere);
    }

    for house in houses {
        for student in students {
            for other in students.iter().filter(|other| **other != student) {
                rules.push(placed(student, house)?.implies(!placed(*other, house)?));
            }
        }
    }

    let stages = vec![
        Stage {
            note: "Each student is in exactly one house, and no two students share a house",
            sentences: rules,
        },
        Stage {
            note: "Gilderoy is in Gryffindor or Ravenclaw",
            sentences: vec![placed("Gilderoy", "Gryffindor")? | placed("Gilderoy", "Ravenclaw")?],
        },
        Stage {
            note: "Pomona is not in Slytherin",
            sentences: vec![!placed("Pomona", "Slytherin")?],
        },
        Stage {
            note: "Minerva is in Gryffindor",
            sentences: vec![placed("Minerva", "Gryffindor")?],
        },
    ];

    Ok(Puzzle {
        symbols: all,
        stages,
    })
}
