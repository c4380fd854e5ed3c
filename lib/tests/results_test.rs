#[macro_use]
extern crate assert_matches;

use rs_wordle_filter::*;

#[test]
fn letter_result_from_char() {
    assert_matches!(LetterResult::from_char('g'), Ok(LetterResult::Correct));
    assert_matches!(LetterResult::from_char('Y'), Ok(LetterResult::PresentNotHere));
    assert_matches!(LetterResult::from_char('.'), Ok(LetterResult::NotPresent));
    assert_matches!(
        LetterResult::from_char('x'),
        Err(WordleError::UnsupportedFeedback('x'))
    );
}

#[test]
fn guess_result_parse_succeeds() {
    let result = GuessResult::parse("слава", "g.y.g");

    assert_matches!(
        result,
        Ok(GuessResult {
            guess: "слава",
            results: _,
        })
    );
    assert_eq!(
        result.unwrap().results,
        vec![
            LetterResult::Correct,
            LetterResult::NotPresent,
            LetterResult::PresentNotHere,
            LetterResult::NotPresent,
            LetterResult::Correct,
        ]
    );
}

#[test]
fn guess_result_parse_wrong_length() {
    assert_matches!(
        GuessResult::parse("слава", "g.y."),
        Err(WordleError::WordLength(5))
    );
}

#[test]
fn guess_result_parse_bad_feedback() {
    assert_matches!(
        GuessResult::parse("goal", "g?.."),
        Err(WordleError::UnsupportedFeedback('?'))
    );
}

#[test]
fn error_messages_name_the_problem() {
    let error = WordleError::PositionOutOfRange {
        letter: 'в',
        position: 7,
        char_count: 5,
    };
    assert_eq!(
        error.to_string(),
        "letter 'в' references position 7, but words have 5 letters"
    );

    let error = WordleError::ConflictingPositions {
        position: 4,
        first: 'а',
        second: 'я',
    };
    assert_eq!(
        error.to_string(),
        "position 4 cannot hold both 'а' and 'я'"
    );
}
