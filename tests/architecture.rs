//! Architecture Verification Suite
//!
//! Shared state must be safe to hand to every request task, and the
//! generators must accept any `Rng` so tests can inject a seeded one.

#[cfg(test)]
mod architecture_tests {
    use rand::rngs::mock::StepRng;
    use swara_games::games;

    #[test]
    fn test_shared_state_is_thread_safe() {
        fn assert_send_sync<T: Send + Sync>() {}

        assert_send_sync::<swara_games::AppState>();
        assert_send_sync::<swara_games::session::SessionStore>();
        assert_send_sync::<swara_games::auth::CredentialTable>();
    }

    #[test]
    fn test_generators_accept_any_rng() {
        let mut rng = StepRng::new(0, 1);
        let round = games::generate_pattern(2, &mut rng).unwrap();
        assert_eq!(round.pattern.len(), 5);

        let melody = games::generate_sour_melody(&mut rng);
        assert_eq!(melody.melody.len(), 5);

        let mut session = games::NavarasaSession::enter(&mut rng);
        assert!(session.next_question(&mut rng).audio.is_some());
    }

    #[test]
    fn test_error_statuses_are_distinct() {
        use axum::http::StatusCode;
        use swara_games::GameError;

        assert_eq!(GameError::Unauthorized.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(GameError::InvalidLevel(7).status(), StatusCode::BAD_REQUEST);
    }
}
