#[cfg(test)]
mod tests {

    use std::error::Error;

    use ron;
    use rs_wordle_filter::*;

    #[test]
    fn filter_spec_from_ron() -> Result<(), Box<dyn Error>> {
        let bank = WordBank::from_iterator(["слава", "халва", "ульва", "пчела"]);
        let spec = ron::from_str::<FilterSpec>(
            r#"WithConstraints(
                char_count: 5,
                constraints: [
                    (letter: 'а', is_present: true, known_position: Some(4)),
                    (letter: 'л', is_present: true, known_position: None, excluded_positions: [2]),
                    (letter: 'е', is_present: false, known_position: None),
                ],
            )"#,
        )?;

        assert_eq!(
            spec.constraints()[1],
            LetterConstraint::elsewhere('л', [2])
        );
        assert_eq!(bank.filter(&spec)?, vec!["слава", "ульва"]);
        Ok(())
    }

    #[test]
    fn filter_spec_serde() -> Result<(), Box<dyn Error>> {
        let guess = GuessResult::parse("crane", "yy..g")?;
        let spec = FilterSpec::from_guess_results(5, &[guess])?;

        let ser = ron::to_string(&spec);
        assert!(ser.is_ok());

        let deser = ron::from_str::<FilterSpec>(&ser.unwrap())?;
        assert_eq!(deser, spec);
        Ok(())
    }

    #[test]
    fn length_only_from_ron() -> Result<(), Box<dyn Error>> {
        let spec = ron::from_str::<FilterSpec>("LengthOnly(4)")?;

        assert_eq!(spec, FilterSpec::LengthOnly(4));
        Ok(())
    }

    #[test]
    fn letter_results_from_ron() -> Result<(), Box<dyn Error>> {
        let results = ron::from_str::<Vec<LetterResult>>("[Correct, PresentNotHere, NotPresent]")?;

        assert_eq!(
            results,
            vec![
                LetterResult::Correct,
                LetterResult::PresentNotHere,
                LetterResult::NotPresent
            ]
        );
        Ok(())
    }
}
