// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Leaderboard computation.
//!
//! Totals are derived from the workout list on every call; nothing is
//! cached. Users with equal totals keep their roster order.

use std::collections::HashMap;

use crate::models::{LeaderboardEntry, PointsTally, User, Workout};

/// Sum points and count workouts per user id.
pub fn tally_by_user(workouts: &[Workout]) -> HashMap<&str, PointsTally> {
    let mut tallies: HashMap<&str, PointsTally> = HashMap::new();
    for workout in workouts {
        tallies
            .entry(workout.user_id.as_str())
            .or_default()
            .add(workout);
    }
    tallies
}

/// Build the ranked leaderboard.
pub fn leaderboard(users: &[User], workouts: &[Workout]) -> Vec<LeaderboardEntry> {
    let tallies = tally_by_user(workouts);

    let mut rows: Vec<(&User, PointsTally)> = users
        .iter()
        .map(|u| (u, tallies.get(u.id.as_str()).copied().unwrap_or_default()))
        .collect();

    // sort_by is stable: ties stay in roster order
    rows.sort_by(|a, b| b.1.total_points.total_cmp(&a.1.total_points));

    let baseline = points_baseline(rows.first().map(|(_, t)| t.total_points));

    rows.into_iter()
        .enumerate()
        .map(|(i, (user, tally))| LeaderboardEntry::new(i as u32 + 1, user, tally, baseline))
        .collect()
}

/// Denominator for relative bar widths.
///
/// The leader's total, or 1 when there is no leader or the leader has no
/// points yet.
pub fn points_baseline(top_points: Option<f64>) -> f64 {
    match top_points {
        Some(p) if p > 0.0 => p,
        _ => 1.0,
    }
}

/// Rank of one user, `None` if the id is not on the roster.
pub fn rank_of(users: &[User], workouts: &[Workout], user_id: &str) -> Option<u32> {
    leaderboard(users, workouts)
        .into_iter()
        .find(|e| e.user.id == user_id)
        .map(|e| e.rank)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ActivityType;
    use chrono::Utc;

    fn user(id: &str) -> User {
        User {
            id: id.to_string(),
            username: format!("user{}", id),
            password: None,
            name: format!("User {}", id),
            is_admin: false,
            avatar: String::new(),
        }
    }

    fn workout(user_id: &str, points: f64) -> Workout {
        Workout {
            id: crate::models::workout::new_record_id(),
            user_id: user_id.to_string(),
            activity_type: ActivityType::new("Crossfit"),
            points,
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn test_single_user_no_workouts() {
        let board = leaderboard(&[user("1")], &[]);

        assert_eq!(board.len(), 1);
        assert_eq!(board[0].user.id, "1");
        assert_eq!(board[0].total_points, 0.0);
        assert_eq!(board[0].workout_count, 0);
        assert_eq!(board[0].rank, 1);
        assert_eq!(board[0].ratio, 0.0);
    }

    #[test]
    fn test_empty_leaderboard() {
        assert!(leaderboard(&[], &[]).is_empty());
        assert_eq!(points_baseline(None), 1.0);
    }

    #[test]
    fn test_sorted_descending_with_counts() {
        let users = vec![user("a"), user("b"), user("c")];
        let workouts = vec![
            workout("b", 1.0),
            workout("c", 0.25),
            workout("b", 1.0),
            workout("a", 1.0),
        ];

        let board = leaderboard(&users, &workouts);
        let order: Vec<&str> = board.iter().map(|e| e.user.id.as_str()).collect();

        assert_eq!(order, vec!["b", "a", "c"]);
        assert_eq!(board[0].total_points, 2.0);
        assert_eq!(board[0].workout_count, 2);
        assert_eq!(board[0].ratio, 1.0);
        assert_eq!(board[1].ratio, 0.5);
        assert_eq!(board.iter().map(|e| e.rank).collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[test]
    fn test_ties_keep_roster_order() {
        let users = vec![user("A"), user("B")];
        let workouts = vec![workout("B", 5.0), workout("A", 5.0)];

        let board = leaderboard(&users, &workouts);

        assert_eq!(board[0].user.id, "A");
        assert_eq!(board[1].user.id, "B");
    }

    #[test]
    fn test_rank_of() {
        let users = vec![user("a"), user("b")];
        let workouts = vec![workout("b", 1.0)];

        assert_eq!(rank_of(&users, &workouts, "b"), Some(1));
        assert_eq!(rank_of(&users, &workouts, "a"), Some(2));
        assert_eq!(rank_of(&users, &workouts, "zzz"), None);
    }

    #[test]
    fn test_workouts_of_unknown_users_ignored() {
        let users = vec![user("a")];
        let workouts = vec![workout("ghost", 3.0), workout("a", 1.0)];

        let board = leaderboard(&users, &workouts);
        assert_eq!(board.len(), 1);
        assert_eq!(board[0].total_points, 1.0);
    }
}
