use five_letters::{load_words, Constraints, Error, Feedback, Language, Mark, MarkSymbols, Word};
use std::path::Path;

fn ru(s: &str) -> Word {
    Language::Russian.parse_word(s).unwrap()
}

fn marks(s: &str) -> Feedback {
    Feedback::parse(s, &MarkSymbols::RUSSIAN).unwrap()
}

fn fixture_words() -> Vec<Word> {
    let path = Path::new(concat!(env!("CARGO_MANIFEST_DIR"), "/tests/data/nouns.txt"));
    load_words(path, Language::Russian).unwrap()
}

fn allowed(constraints: &Constraints, words: &[Word]) -> Vec<Word> {
    words
        .iter()
        .copied()
        .filter(|w| constraints.allows(w))
        .collect()
}

#[test]
fn test_empty_allows_everything() {
    let constraints = Constraints::new();
    assert!(constraints.is_empty());
    assert!(constraints.is_consistent());
    let words = fixture_words();
    assert_eq!(allowed(&constraints, &words).len(), words.len());
}

#[test]
fn test_allows_each_rule() {
    let word = ru("кошка");

    let mut c = Constraints::new();
    c.present.insert('ш');
    assert!(c.allows(&word));
    c.present.insert('з');
    assert!(!c.allows(&word));

    let mut c = Constraints::new();
    c.absent.insert('о');
    assert!(!c.allows(&word));

    let mut c = Constraints::new();
    c.exact.insert((0, 'к'));
    assert!(c.allows(&word));
    c.exact.insert((1, 'а'));
    assert!(!c.allows(&word));

    let mut c = Constraints::new();
    c.forbidden_at.insert((4, 'к'));
    assert!(c.allows(&word));
    c.forbidden_at.insert((3, 'к'));
    assert!(!c.allows(&word));

    let mut c = Constraints::new();
    c.min_count.insert('к', 2);
    assert!(c.allows(&word));
    c.min_count.insert('к', 3);
    assert!(!c.allows(&word));

    let mut c = Constraints::new();
    c.max_count.insert('к', 2);
    assert!(c.allows(&word));
    c.max_count.insert('к', 1);
    assert!(!c.allows(&word));
}

#[test]
fn test_contradiction_admits_nothing() {
    let mut constraints = Constraints::new();
    constraints.present.insert('а');
    constraints.absent.insert('а');
    assert!(!constraints.is_consistent());
    assert!(allowed(&constraints, &fixture_words()).is_empty());
}

#[test]
fn test_repeated_letter_edge_case() {
    let en = |s: &str| Language::English.parse_word(s).unwrap();
    let guess = en("abbcd");
    let feedback = Feedback::calculate(&guess, &en("abcde"));

    let b_marks: Vec<Mark> = guess
        .chars()
        .iter()
        .zip(feedback.marks())
        .filter(|(&c, _)| c == 'b')
        .map(|(_, &m)| m)
        .collect();
    assert_eq!(b_marks, [Mark::Exact, Mark::Absent]);

    let mut constraints = Constraints::new();
    constraints.apply(&guess, &feedback);

    assert_eq!(constraints.max_count.get(&'b'), Some(&1));
    assert_eq!(constraints.min_count.get(&'b'), Some(&1));
    assert!(constraints.present.contains(&'b'));
    assert!(!constraints.absent.contains(&'b'));
    assert!(constraints.exact.contains(&(1, 'b')));
    assert!(constraints.forbidden_at.contains(&(2, 'b')));
    assert!(constraints.allows(&en("abcde")));
    assert!(!constraints.allows(&en("abbde")));
}

#[test]
fn test_surplus_repeat_forbids_position() {
    let mut constraints = Constraints::new();
    constraints.apply(&ru("лотос"), &marks("сжссб"));

    assert_eq!(
        constraints.present.iter().copied().collect::<String>(),
        "ос"
    );
    assert!(constraints.absent.contains(&'л'));
    assert!(constraints.absent.contains(&'т'));
    assert!(!constraints.absent.contains(&'о'));
    assert!(constraints.exact.contains(&(1, 'о')));
    assert!(constraints.forbidden_at.contains(&(3, 'о')));
    assert!(constraints.forbidden_at.contains(&(4, 'с')));
    assert_eq!(constraints.max_count.get(&'о'), Some(&1));
    assert_eq!(constraints.max_count.get(&'л'), Some(&0));
    assert_eq!(constraints.max_count.get(&'с'), None);
    assert!(constraints.allows(&ru("сосна")));
    assert!(!constraints.allows(&ru("сокол")));
}

#[test]
fn test_present_and_surplus_in_one_guess() {
    let mut constraints = Constraints::new();
    constraints.apply(&ru("казак"), &marks("жбссб"));

    assert!(constraints.exact.contains(&(0, 'к')));
    assert!(constraints.forbidden_at.contains(&(1, 'а')));
    assert!(constraints.forbidden_at.contains(&(3, 'а')));
    assert!(constraints.forbidden_at.contains(&(4, 'к')));
    assert!(constraints.absent.contains(&'з'));
    assert_eq!(constraints.min_count.get(&'к'), Some(&2));
    assert_eq!(constraints.min_count.get(&'а'), Some(&1));
    assert_eq!(constraints.max_count.get(&'а'), Some(&1));
    assert_eq!(constraints.max_count.get(&'з'), Some(&0));
    assert!(constraints.allows(&ru("кошка")));
}

#[test]
fn test_gray_after_present_in_earlier_round() {
    let mut constraints = Constraints::new();
    constraints.apply(&ru("сокол"), &marks("сбссс"));
    assert!(constraints.present.contains(&'о'));

    // Every "о" gray while an earlier round proved it present: the positions
    // are recorded as forbidden, and the count bound then rules the letter out.
    constraints.apply(&ru("обзор"), &marks("ссссс"));
    assert!(constraints.forbidden_at.contains(&(0, 'о')));
    assert!(constraints.forbidden_at.contains(&(3, 'о')));
    assert!(constraints.absent.contains(&'о'));
    assert!(!constraints.present.contains(&'о'));
    assert_eq!(constraints.max_count.get(&'о'), Some(&0));
    assert!(!constraints.is_consistent());
}

#[test]
fn test_all_gray_marks_letter_absent() {
    let mut constraints = Constraints::new();
    constraints.apply(&ru("ааааа"), &marks("ссссс"));
    assert!(constraints.absent.contains(&'а'));
    assert_eq!(constraints.max_count.get(&'а'), Some(&0));
    assert!(constraints.forbidden_at.is_empty());
    assert!(!constraints.allows(&ru("ласка")));
    assert!(constraints.allows(&ru("лотос")));
}

#[test]
fn test_exact_never_also_forbidden() {
    let mut constraints = Constraints::new();
    constraints.apply(&ru("лотос"), &marks("жжжжж"));
    constraints.apply(&ru("лотос"), &marks("бжжжж"));
    assert!(!constraints.forbidden_at.contains(&(0, 'л')));
    assert!(constraints.exact.contains(&(0, 'л')));
}

#[test]
fn test_conflicting_counts_are_inconsistent() {
    let mut constraints = Constraints::new();
    constraints.apply(&ru("казак"), &marks("жбссб"));
    constraints.apply(&ru("кошка"), &marks("ссссс"));
    assert!(!constraints.is_consistent());
    assert!(allowed(&constraints, &fixture_words()).is_empty());
}

#[test]
fn test_apply_input() {
    let mut constraints = Constraints::new();
    let (guess, feedback) = constraints
        .apply_input("ЛОТОС", "сжссб", Language::Russian)
        .unwrap();
    assert_eq!(guess, ru("лотос"));
    assert_eq!(feedback, marks("сжссб"));
    assert!(constraints.exact.contains(&(1, 'о')));
}

#[test]
fn test_apply_input_errors_leave_constraints_untouched() {
    let mut constraints = Constraints::new();
    assert!(matches!(
        constraints.apply_input("лото", "сжссб", Language::Russian),
        Err(Error::InvalidWord { .. })
    ));
    assert!(matches!(
        constraints.apply_input("лотос", "сжсс", Language::Russian),
        Err(Error::InvalidFeedback { .. })
    ));
    assert!(matches!(
        constraints.apply_input("лотос", "сжсqб", Language::Russian),
        Err(Error::InvalidFeedback { .. })
    ));
    assert!(constraints.is_empty());
}

#[test]
fn test_idempotent_feedback() {
    let words = fixture_words();
    for secret in words.iter().step_by(7) {
        for guess in words.iter().step_by(11) {
            let feedback = Feedback::calculate(guess, secret);
            let mut once = Constraints::new();
            once.apply(guess, &feedback);
            let mut twice = once.clone();
            twice.apply(guess, &feedback);
            assert_eq!(once, twice, "{} against {}", guess, secret);
        }
    }
}

#[test]
fn test_secret_survives_its_own_feedback() {
    let words = fixture_words();
    for secret in &words {
        for guess in &words {
            let mut constraints = Constraints::new();
            constraints.apply(guess, &Feedback::calculate(guess, secret));
            assert!(
                constraints.allows(secret),
                "{} eliminated by guessing {}",
                secret,
                guess
            );
            assert!(constraints.is_consistent());
        }
    }
}

#[test]
fn test_more_feedback_never_grows_candidates() {
    let words = fixture_words();
    for secret in words.iter().step_by(5) {
        let mut constraints = Constraints::new();
        let mut previous = allowed(&constraints, &words);
        for guess in words.iter().step_by(23) {
            constraints.apply(guess, &Feedback::calculate(guess, secret));
            let current = allowed(&constraints, &words);
            assert!(current.iter().all(|w| previous.contains(w)));
            assert!(current.contains(secret));
            previous = current;
        }
    }
}
