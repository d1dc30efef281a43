use std::collections::HashMap;
use crate::enums::difficulty::Difficulty;
use crate::helpers::text_helper::capitalize;
use crate::structs::category_stats::CategoryStats;
use crate::structs::difficulty_stats::DifficultyStats;
use crate::structs::trivia::trivia_question::TriviaQuestion;

/// Keeps the questions in `selected`; `None` keeps everything.
pub fn filter_by_category<'a>(questions: &'a [TriviaQuestion], selected: Option<&str>) -> Vec<&'a TriviaQuestion> {
    match selected {
        Some(category) => questions.iter().filter(|q| q.category == category).collect(),
        None => questions.iter().collect(),
    }
}

/// Question count per category, largest first. Ties keep first-seen order.
pub fn category_counts<'a, I>(questions: I) -> Vec<CategoryStats>
where
    I: IntoIterator<Item = &'a TriviaQuestion>,
{
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut stats: Vec<CategoryStats> = Vec::new();

    for question in questions {
        match index.get(question.category.as_str()) {
            Some(&position) => stats[position].count += 1,
            None => {
                index.insert(question.category.as_str(), stats.len());
                stats.push(CategoryStats::new(&question.category, 1));
            }
        }
    }

    stats.sort_by(|a, b| b.count.cmp(&a.count));
    stats
}

/// Question count per difficulty in Easy, Medium, Hard order.
///
/// Labels outside the fixed three get their own bucket after Hard, in
/// first-seen order.
pub fn difficulty_counts<'a, I>(questions: I) -> Vec<DifficultyStats>
where
    I: IntoIterator<Item = &'a TriviaQuestion>,
{
    let mut fixed = [0usize; Difficulty::ALL.len()];
    let mut extra: Vec<(String, usize)> = Vec::new();

    for question in questions {
        if let Some(position) = Difficulty::ALL.iter().position(|d| d.as_str() == question.difficulty) {
            fixed[position] += 1;
            continue;
        }
        match extra.iter_mut().find(|(label, _)| *label == question.difficulty) {
            Some((_, count)) => *count += 1,
            None => extra.push((question.difficulty.clone(), 1)),
        }
    }

    Difficulty::ALL
        .iter()
        .zip(fixed)
        .map(|(difficulty, count)| DifficultyStats::new(difficulty.display_name(), count))
        .chain(extra.into_iter().map(|(label, count)| DifficultyStats::new(&capitalize(&label), count)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn question(category: &str, difficulty: &str) -> TriviaQuestion {
        TriviaQuestion {
            category: category.to_string(),
            question_type: "boolean".to_string(),
            difficulty: difficulty.to_string(),
            question: format!("{} question", category),
            correct_answer: "True".to_string(),
            incorrect_answers: vec!["False".to_string()],
        }
    }

    #[test]
    fn categories_are_counted_and_sorted_descending() {
        let questions = vec![question("A", "easy"), question("B", "easy"), question("A", "hard")];
        assert_eq!(
            category_counts(&questions),
            vec![CategoryStats::new("A", 2), CategoryStats::new("B", 1)]
        );
    }

    #[test]
    fn category_ties_keep_first_seen_order() {
        let questions = vec![question("C", "easy"), question("A", "easy"), question("B", "easy"), question("B", "easy")];
        let names: Vec<String> = category_counts(&questions).into_iter().map(|s| s.name).collect();
        assert_eq!(names, vec!["B", "C", "A"]);
    }

    #[test]
    fn difficulties_use_fixed_order_with_zero_buckets() {
        let questions = vec![question("A", "easy"), question("A", "hard"), question("A", "easy")];
        assert_eq!(
            difficulty_counts(&questions),
            vec![
                DifficultyStats::new("Easy", 2),
                DifficultyStats::new("Medium", 0),
                DifficultyStats::new("Hard", 1),
            ]
        );
    }

    #[test]
    fn unknown_difficulty_gets_a_new_bucket() {
        let questions = vec![question("A", "expert"), question("A", "medium"), question("A", "expert")];
        assert_eq!(
            difficulty_counts(&questions),
            vec![
                DifficultyStats::new("Easy", 0),
                DifficultyStats::new("Medium", 1),
                DifficultyStats::new("Hard", 0),
                DifficultyStats::new("Expert", 2),
            ]
        );
    }

    #[test]
    fn empty_input_still_reports_fixed_buckets() {
        let questions: Vec<TriviaQuestion> = Vec::new();
        assert!(category_counts(&questions).is_empty());
        assert_eq!(difficulty_counts(&questions).len(), 3);
        assert!(difficulty_counts(&questions).iter().all(|d| d.count == 0));
    }

    #[test]
    fn filtering_then_reaggregating_drops_other_categories() {
        let questions = vec![question("A", "easy"), question("B", "easy"), question("A", "hard")];

        let filtered = filter_by_category(&questions, Some("A"));
        assert_eq!(filtered.len(), 2);
        assert!(filtered.iter().all(|q| q.category == "A"));

        assert_eq!(category_counts(filtered.iter().copied()), vec![CategoryStats::new("A", 2)]);
    }

    #[test]
    fn no_selection_is_identity() {
        let questions = vec![question("A", "easy"), question("B", "medium")];
        let filtered = filter_by_category(&questions, None);
        assert_eq!(filtered.len(), questions.len());
        assert!(filtered.iter().zip(questions.iter()).all(|(a, b)| *a == b));
    }

    #[test]
    fn unknown_selection_yields_nothing() {
        let questions = vec![question("A", "easy")];
        assert!(filter_by_category(&questions, Some("Z")).is_empty());
    }

    proptest! {
        #[test]
        fn counts_cover_every_question(
            picks in proptest::collection::vec((0usize..5, 0usize..4), 0..60)
        ) {
            let categories = ["A", "B", "C", "D", "E"];
            let difficulties = ["easy", "medium", "hard", "weird"];
            let questions: Vec<TriviaQuestion> = picks
                .iter()
                .map(|(c, d)| question(categories[*c], difficulties[*d]))
                .collect();

            let by_category = category_counts(&questions);
            let by_difficulty = difficulty_counts(&questions);

            prop_assert_eq!(by_category.iter().map(|s| s.count).sum::<usize>(), questions.len());
            prop_assert_eq!(by_difficulty.iter().map(|s| s.count).sum::<usize>(), questions.len());
            prop_assert!(by_category.windows(2).all(|w| w[0].count >= w[1].count));
            prop_assert_eq!(&by_difficulty[0].name, "Easy");
            prop_assert_eq!(&by_difficulty[1].name, "Medium");
            prop_assert_eq!(&by_difficulty[2].name, "Hard");
        }
    }
}
