use crate::models::{Review, ReviewFilter, ReviewSummary};

pub fn filter_reviews(reviews: &[Review], filter: ReviewFilter) -> Vec<Review> {
    reviews
        .iter()
        .filter(|review| filter.matches(review.rating))
        .cloned()
        .collect()
}

/// Average and star distribution over the unfiltered list. Ratings outside 1..=5 are skipped.
pub fn summarize_reviews(reviews: &[Review]) -> ReviewSummary {
    let mut distribution = [0usize; 5];
    let mut total = 0usize;
    let mut sum = 0u32;
    for review in reviews.iter().filter(|review| (1..=5).contains(&review.rating)) {
        distribution[(review.rating - 1) as usize] += 1;
        total += 1;
        sum += review.rating as u32;
    }

    let average = if total == 0 {
        0.0
    } else {
        sum as f32 / total as f32
    };

    ReviewSummary {
        total,
        average,
        distribution,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::catalog::seed_reviews;

    #[test]
    fn summary_of_seeded_reviews() {
        let summary = summarize_reviews(&seed_reviews());

        assert_eq!(summary.total, 5);
        assert!((summary.average - 4.4).abs() < 0.001);
        assert_eq!(summary.count_for(5), 3);
        assert_eq!(summary.count_for(4), 1);
        assert_eq!(summary.count_for(3), 1);
        assert_eq!(summary.count_for(1), 0);
    }

    #[test]
    fn empty_summary_has_zero_average() {
        let summary = summarize_reviews(&[]);
        assert_eq!(summary.total, 0);
        assert_eq!(summary.average, 0.0);
    }

    #[test]
    fn out_of_range_ratings_are_skipped_everywhere() {
        let mut reviews = seed_reviews();
        reviews[0].rating = 0;
        reviews[1].rating = 9;

        let summary = summarize_reviews(&reviews);
        assert_eq!(summary.total, 3);
        assert_eq!(summary.distribution.iter().sum::<usize>(), summary.total);
        assert!(summary.average >= 1.0 && summary.average <= 5.0);
    }

    #[test]
    fn filter_keeps_catalog_order() {
        let reviews = seed_reviews();
        let positive: Vec<String> = filter_reviews(&reviews, ReviewFilter::Positive)
            .into_iter()
            .map(|review| review.id)
            .collect();
        assert_eq!(positive, vec!["1", "2", "3", "5"]);

        assert_eq!(filter_reviews(&reviews, ReviewFilter::Neutral).len(), 1);
        assert!(filter_reviews(&reviews, ReviewFilter::Negative).is_empty());
        assert_eq!(filter_reviews(&reviews, ReviewFilter::All).len(), 5);
    }
}
