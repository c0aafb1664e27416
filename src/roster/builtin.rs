use super::types::{ClassRecord, DirectorySettings, Roster, StudentRecord};

/// A class as it is laid out in the built-in table
#[derive(Debug)]
struct ClassSpec {
    code: &'static str,
    ou: &'static str,
    specialization: &'static str,
    teacher: &'static str,
    /// (first name, last name) pairs in roster order
    students: &'static [(&'static str, &'static str)],
}

impl ClassSpec {
    fn to_record(&self) -> ClassRecord {
        ClassRecord {
            code: self.code.to_string(),
            ou: self.ou.to_string(),
            specialization: self.specialization.to_string(),
            teacher: self.teacher.to_string(),
            students: self.students.iter()
                .map(|(first, last)| StudentRecord::new(*first, *last))
                .collect(),
        }
    }
}

// Class lists as of 20.11.2025, first-year cohort 2025/2026.
const CLASSES: &[ClassSpec] = &[
    ClassSpec {
        code: "1AT",
        ou: "Class-1AT",
        specialization: "technik mechatronik",
        teacher: "Edyta Kozicka (EK)",
        students: &[
            ("Piotr", "Adamek"),
            ("Kacper", "Borek"),
            ("Jan", "Chlondowski"),
            ("Adam", "Elias"),
            ("Mikołaj", "Glizia"),
            ("Szymon", "Jabcoń"),
            ("Jakub", "Jabłoński"),
            ("Jan", "Kaczmarski"),
            ("Jakub", "Karczewski"),
            ("Bartosz", "Kołodyński"),
            ("Oliver", "Kret"),
            ("Bartosz", "Latała"),
            ("Paweł", "Lis"),
            ("Oskar", "Madeła"),
            ("Szymon", "Mazur"),
            ("Michał", "Oleś"),
            ("Filip", "Padamczyk"),
            ("Bartosz", "Pluta"),
            ("Wiktor Marek", "Polańczyk"),
            ("Karol", "Sąsiadek"),
            ("Tomasz", "Sekula"),
            ("Szymon", "Sikora"),
            ("Zuzanna", "Siwińska"),
            ("Aleksander", "Sklorz"),
            ("Sara", "Staszczyszyn"),
            ("Mikołaj", "Szkwarkowski"),
            ("Mateusz", "Szmit"),
            ("Bartosz", "Śliwiński"),
            ("Rafał", "Ślusarczyk"),
            ("Franciszek", "Ulrich"),
            ("Paweł", "Ustrzycki"),
        ],
    },
    ClassSpec {
        code: "1BT1",
        ou: "Class-1BT1",
        specialization: "technik elektryk",
        teacher: "Magdalena Turek (TU)",
        students: &[
            ("Michał", "Gabriel"),
            ("Łukasz", "Garbaczok"),
            ("Franciszek", "Grzyb"),
            ("Paweł", "Hadrian"),
            ("Jan", "Ilków"),
            ("Miłosz", "Jóśko"),
            ("Filip", "Junger"),
            ("Jakub", "Kotynia"),
            ("Julian", "Kowcun"),
            ("Jan", "Kucharski"),
            ("Jakub", "Linkowski"),
            ("Noah", "Mrachatz"),
            ("Daniel", "Skiba"),
            ("Krystian", "Szukała"),
            ("Mateusz", "Szymkowiak"),
            ("Lech", "Wojnar"),
            ("Damian", "Zmarzlik"),
        ],
    },
    ClassSpec {
        code: "1BT2",
        ou: "Class-1BT2",
        specialization: "technik automatyk",
        teacher: "Magdalena Turek (TU)",
        students: &[
            ("Dominik", "Bekiesz"),
            ("Natan", "Dębowski"),
            ("Maciej", "Dudek"),
            ("Szymon", "Hadamek"),
            ("Maksymilian", "Hartyn Leszczyński"),
            ("Dariusz", "Ibrahim"),
            ("Jan", "Lika"),
            ("Kornel", "Osadzin"),
            ("Wojciech", "Pietruszka"),
            ("Krzysztof", "Rother"),
            ("Mateusz", "Skrzipczyk"),
            ("Michał", "Stepczuk"),
            ("Dominik", "Szafranek"),
            ("Miłosz", "Szczęśniak"),
            ("Tobiasz", "Szneider"),
            ("Rafał", "Wrzeciono"),
        ],
    },
    ClassSpec {
        code: "1CT1",
        ou: "Class-1CT1",
        specialization: "technik programista",
        teacher: "Piotr Muszyński (Mu)",
        students: &[
            ("Szymon", "Czapluk"),
            ("Filip", "Druzgała"),
            ("Dawid", "Gryc"),
            ("Aleksander", "Grzelak"),
            ("Oskar", "Kaźmierowicz"),
            ("Karol", "Kmiecik"),
            ("Kacper", "Korczak"),
            ("Marcel", "Kupczyk"),
            ("Szymon", "Mientus"),
            ("Dominik", "Moch"),
            ("Jan", "Niewiadomski"),
            ("David", "Radzioch"),
            ("Paweł", "Wieja"),
            ("Krzysztof", "Żak"),
        ],
    },
    ClassSpec {
        code: "1CT2",
        ou: "Class-1CT2",
        specialization: "technik teleinformatyk",
        teacher: "Piotr Muszyński (Mu)",
        students: &[
            ("Franciszek", "Cichy"),
            ("Tymoteusz", "Cieśliński"),
            ("Adam", "Gaj"),
            ("Ignacy", "Gaweł"),
            ("Tomasz", "Górski"),
            ("Jakub", "Konieczyński"),
            ("Aleksander", "Macioszek-Kurc"),
            ("Franciszek", "Majcherczyk"),
            ("Adam", "Nowicki"),
            ("Michał", "Raszka"),
            ("Jakob", "Rudziński"),
            ("Ksawier", "Serek"),
            ("Tymon", "Stasiak"),
            ("Szymon", "Staszowski"),
        ],
    },
    ClassSpec {
        code: "1DT",
        ou: "Class-1DT",
        specialization: "technik informatyk",
        teacher: "Joanna Sukiennik (JS)",
        students: &[
            ("Bartosz", "Anioł"),
            ("Filip", "Barteczko"),
            ("Konrad", "Bartków"),
            ("Maksymilian", "Bisztyga"),
            ("Paweł", "Bobko"),
            ("Wiktor", "Buhl"),
            ("Marcin", "Dworak"),
            ("Michał", "Firlus"),
            ("Adam", "Gromada"),
            ("Nikodem", "Josek"),
            ("Franciszek", "Judek"),
            ("Julia", "Kałuża"),
            ("Robert", "Kempa"),
            ("Aleksander", "Kowcz"),
            ("Szymon", "Marciak"),
            ("Grzegorz", "Młot"),
            ("Dominik", "Muszkiet"),
            ("Bartosz", "Napieralski"),
            ("Adam", "Ozaist"),
            ("Aleksander", "Pawłowicz"),
            ("Arsenii", "Protsak"),
            ("Tomasz", "Romik"),
            ("Jakub", "Siendzielorz"),
            ("Łukasz", "Słupczyński"),
            ("Grzegorz", "Soboń"),
            ("Marcel", "Sosnowski"),
            ("Nazarii", "Trach"),
            ("Franciszek", "Werner"),
            ("Kacper", "Wolny"),
            ("Stanisław", "Wójcik"),
        ],
    },
    ClassSpec {
        code: "1AB",
        ou: "Class-1AB",
        specialization: "elektryk",
        teacher: "Marek Małecki (MM)",
        students: &[
            ("Alim", "Ba"),
            ("Mateusz", "Bartków"),
            ("Miłosz", "Białas"),
            ("Adam", "Białecki"),
            ("Franciszek", "Bil"),
            ("Robert", "Cebula"),
            ("Jakub", "Ciuła"),
            ("Maksymilian", "Cybula"),
            ("Adam", "Dunat"),
            ("Piotr", "Dwojak"),
            ("Daniel", "Fronia"),
            ("Roland", "Gricman"),
            ("Nataniel", "Haręza"),
            ("Paweł", "Herman"),
            ("Michał", "Jarosz Selepanov"),
            ("Kacper", "Jenel"),
            ("Wojciech", "Joszko"),
            ("Filip", "Klityński"),
            ("Kamil", "Kudliński"),
            ("Igor", "Latacz"),
            ("Sebastian", "Lauer"),
            ("Michał", "Łoziński"),
            ("Samuel", "Maciejok"),
            ("Krzysztof", "Migura"),
            ("Mateusz Grzegorz", "Mlonka"),
            ("Nicolas", "Narolski"),
            ("Oliwier", "Pastuszka"),
            ("Oliwier", "Prochnij"),
            ("Adam", "Pyka"),
            ("Marcin", "Rudkiewicz"),
            ("Mykyta", "Shylov"),
            ("Maciej", "Tarnawski"),
            ("Oskar", "Wiench"),
            ("Marcin", "Wilczek"),
        ],
    },
    ClassSpec {
        code: "1AW",
        ou: "Class-1AW",
        specialization: "technik elektryk",
        teacher: "Wychowawca TBD",
        students: &[
            ("Michał", "Bałys"),
            ("Jakub", "Batóg"),
            ("Karol", "Błażykowski"),
            ("Rafał", "Błyszcz"),
            ("Łukasz", "Budzowski"),
            ("Mateusz", "Dawidowicz"),
            ("Oskar", "Dzióbek"),
            ("Marek", "Gąsiorowski"),
            ("Łukasz", "Gordzielik"),
            ("Leon", "Kendzierski"),
            ("Filip", "Konieczny"),
            ("Kajetan", "Kosno"),
            ("Mateusz", "Kuc"),
            ("Konrad", "Mirowski"),
            ("Szymon", "Nieckarz"),
            ("Jakub", "Płoskonka"),
            ("Igor", "Pniewski"),
            ("Damian", "Rosiński"),
            ("Aleksander", "Różalski"),
            ("Paweł", "Rydlakowski"),
            ("Krystian", "Sura"),
            ("Sebastian", "Sura"),
            ("Antoni", "Szpiech"),
            ("Bartłomiej", "Świder"),
            ("Kacper", "Ziemniak"),
        ],
    },
];

/// Build the built-in roster with the default directory settings
pub fn builtin_roster() -> Roster {
    Roster::new(
        DirectorySettings::default(),
        CLASSES.iter().map(ClassSpec::to_record).collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::validation::validate_roster;
    use crate::ldif::username::{derive_username, find_collisions};

    #[test]
    fn test_builtin_roster_shape() {
        let roster = builtin_roster();

        assert_eq!(roster.classes.len(), 8);
        assert_eq!(roster.total_students(), 181);

        let codes: Vec<&str> = roster.classes.iter().map(|c| c.code.as_str()).collect();
        assert_eq!(codes, vec!["1AT", "1BT1", "1BT2", "1CT1", "1CT2", "1DT", "1AB", "1AW"]);
    }

    #[test]
    fn test_builtin_roster_is_valid() {
        validate_roster(&builtin_roster()).expect("built-in roster should validate");
    }

    #[test]
    fn test_builtin_roster_class_sizes() {
        let roster = builtin_roster();
        let sizes: Vec<(&str, usize)> = roster.classes.iter()
            .map(|c| (c.code.as_str(), c.student_count()))
            .collect();

        assert_eq!(sizes, vec![
            ("1AT", 31), ("1BT1", 17), ("1BT2", 16), ("1CT1", 14),
            ("1CT2", 14), ("1DT", 30), ("1AB", 34), ("1AW", 25),
        ]);
    }

    #[test]
    fn test_builtin_usernames_are_plain_ascii() {
        let roster = builtin_roster();
        for class in &roster.classes {
            for student in &class.students {
                let username = derive_username(&student.first_name, &student.last_name);
                let (first, last) = username.split_once('.').expect("username has a dot");

                for part in [first, last] {
                    assert!(!part.is_empty(), "empty half in {}", username);
                    assert!(
                        part.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'),
                        "unexpected character in {}", username
                    );
                }
            }
        }
    }

    #[test]
    fn test_builtin_roster_has_no_collisions() {
        assert!(find_collisions(&builtin_roster()).is_empty());
    }
}
