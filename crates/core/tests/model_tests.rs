// ═══════════════════════════════════════════════════════════════════
// Model Tests — wire shapes, Session contract, forms, routes
// ═══════════════════════════════════════════════════════════════════

use fundscope_core::errors::CoreError;
use fundscope_core::models::account::{Credentials, RegistrationForm, SavedFund};
use fundscope_core::models::fund::{FundDetail, FundSummary};
use fundscope_core::models::route::Route;
use fundscope_core::models::session::{Session, MAX_RECENT_SEARCHES};

// ═══════════════════════════════════════════════════════════════════
// Wire shapes
// ═══════════════════════════════════════════════════════════════════

mod wire {
    use super::*;

    #[test]
    fn search_hit_with_numeric_scheme_code() {
        let json = r#"{"schemeCode":120503,"schemeName":"HDFC Balanced Advantage Fund"}"#;
        let hit: FundSummary = serde_json::from_str(json).unwrap();
        assert_eq!(hit.scheme_code, "120503");
        assert_eq!(hit.scheme_name, "HDFC Balanced Advantage Fund");
    }

    #[test]
    fn search_hit_with_string_scheme_code() {
        let json = r#"{"schemeCode":"118551","schemeName":"SBI Bluechip Fund"}"#;
        let hit: FundSummary = serde_json::from_str(json).unwrap();
        assert_eq!(hit.scheme_code, "118551");
    }

    #[test]
    fn fund_detail_snake_case_meta_and_data_series() {
        let json = r#"{
            "meta": {
                "fund_house": "HDFC Mutual Fund",
                "scheme_type": "Open Ended",
                "scheme_category": "Hybrid",
                "scheme_code": 120503,
                "scheme_name": "HDFC Balanced Advantage Fund"
            },
            "data": [
                {"date": "28-12-2024", "nav": "42.85"},
                {"date": "27-12-2024", "nav": "42.61"}
            ]
        }"#;
        let detail: FundDetail = serde_json::from_str(json).unwrap();
        assert_eq!(detail.meta.scheme_code, "120503");
        assert_eq!(detail.meta.fund_house, "HDFC Mutual Fund");
        assert_eq!(detail.series.len(), 2);
        assert_eq!(detail.series[0].nav, "42.85");
    }

    #[test]
    fn saved_fund_record() {
        let json = r#"{"id":42,"fund":{"scheme_code":"120503","scheme_name":"HDFC Balanced Advantage Fund"}}"#;
        let record: SavedFund = serde_json::from_str(json).unwrap();
        assert_eq!(record.id, 42);
        assert_eq!(record.fund.scheme_code, "120503");
    }
}

// ═══════════════════════════════════════════════════════════════════
// Session contract
// ═══════════════════════════════════════════════════════════════════

mod session {
    use super::*;

    #[test]
    fn starts_logged_out() {
        let session = Session::new();
        assert!(!session.is_authenticated());
        assert!(session.token().is_none());
    }

    #[test]
    fn authenticated_iff_token_present() {
        let mut session = Session::new();
        session.login("abc123");
        assert!(session.is_authenticated());
        assert_eq!(session.token(), Some("abc123"));

        session.logout();
        assert!(!session.is_authenticated());
        assert!(session.token().is_none());
    }

    #[test]
    fn logout_preserves_recent_searches() {
        let mut session = Session::new();
        session.login("abc123");
        session.record_search("HDFC");
        session.logout();
        assert_eq!(session.recent_searches(), ["HDFC"]);
    }

    #[test]
    fn repeat_search_moves_to_front_once() {
        let mut session = Session::new();
        session.record_search("HDFC");
        session.record_search("SBI");
        session.record_search("HDFC");
        assert_eq!(session.recent_searches(), ["HDFC", "SBI"]);
    }

    #[test]
    fn dedup_is_case_insensitive() {
        let mut session = Session::new();
        session.record_search("hdfc");
        session.record_search("HDFC");
        assert_eq!(session.recent_searches(), ["HDFC"]);
    }

    #[test]
    fn history_never_exceeds_cap() {
        let mut session = Session::new();
        for i in 0..10 {
            session.record_search(&format!("query-{i}"));
        }
        assert_eq!(session.recent_searches().len(), MAX_RECENT_SEARCHES);
        assert_eq!(session.recent_searches()[0], "query-9");
        assert_eq!(session.recent_searches()[4], "query-5");
    }

    #[test]
    fn whitespace_queries_not_recorded() {
        let mut session = Session::new();
        session.record_search("   ");
        session.record_search("");
        assert!(session.recent_searches().is_empty());
    }

    #[test]
    fn queries_are_trimmed() {
        let mut session = Session::new();
        session.record_search("  HDFC  ");
        assert_eq!(session.recent_searches(), ["HDFC"]);
    }
}

// ═══════════════════════════════════════════════════════════════════
// Form validation
// ═══════════════════════════════════════════════════════════════════

mod registration {
    use super::*;

    fn form(password: &str, confirm: &str) -> RegistrationForm {
        RegistrationForm {
            username: "amrita".into(),
            email: "amrita@example.com".into(),
            password: password.into(),
            confirm_password: confirm.into(),
        }
    }

    #[test]
    fn valid_form_passes() {
        assert!(form("secret1", "secret1").validate().is_ok());
    }

    #[test]
    fn short_password_rejected() {
        let err = form("abc", "abc").validate().unwrap_err();
        match err {
            CoreError::Validation(violations) => {
                assert_eq!(violations.len(), 1);
                assert!(violations[0].contains("at least 6"));
            }
            other => panic!("expected Validation, got {other:?}"),
        }
    }

    #[test]
    fn mismatch_rejected() {
        let err = form("secret1", "secret2").validate().unwrap_err();
        match err {
            CoreError::Validation(violations) => {
                assert_eq!(violations, ["Passwords do not match"]);
            }
            other => panic!("expected Validation, got {other:?}"),
        }
    }

    #[test]
    fn short_and_mismatched_surfaced_together() {
        let err = form("abc", "xyz").validate().unwrap_err();
        match err {
            CoreError::Validation(violations) => {
                assert_eq!(violations.len(), 2);
                assert!(violations.iter().any(|v| v.contains("at least 6")));
                assert!(violations.iter().any(|v| v.contains("do not match")));
            }
            other => panic!("expected Validation, got {other:?}"),
        }
    }
}

mod credentials {
    use super::*;

    #[test]
    fn empty_fields_reported_together() {
        let creds = Credentials {
            username: "  ".into(),
            password: "".into(),
        };
        match creds.validate().unwrap_err() {
            CoreError::Validation(violations) => assert_eq!(violations.len(), 2),
            other => panic!("expected Validation, got {other:?}"),
        }
    }

    #[test]
    fn filled_fields_pass() {
        let creds = Credentials {
            username: "amrita".into(),
            password: "secret1".into(),
        };
        assert!(creds.validate().is_ok());
    }
}

// ═══════════════════════════════════════════════════════════════════
// Routes
// ═══════════════════════════════════════════════════════════════════

mod routes {
    use super::*;

    #[test]
    fn parse_known_surface() {
        assert_eq!(Route::parse("/"), Some(Route::Home));
        assert_eq!(Route::parse("/login"), Some(Route::Login));
        assert_eq!(Route::parse("/register"), Some(Route::Register));
        assert_eq!(Route::parse("/saved-funds"), Some(Route::SavedFunds));
        assert_eq!(Route::parse("/profile"), Some(Route::Profile));
        assert_eq!(
            Route::parse("/fund/120503"),
            Some(Route::Fund {
                scheme_code: "120503".into()
            })
        );
        assert_eq!(
            Route::parse("/search?q=HDFC"),
            Some(Route::Search {
                query: "HDFC".into()
            })
        );
    }

    #[test]
    fn search_without_query_is_empty_query() {
        assert_eq!(
            Route::parse("/search"),
            Some(Route::Search { query: String::new() })
        );
    }

    #[test]
    fn unknown_paths_rejected() {
        assert_eq!(Route::parse("/admin"), None);
        assert_eq!(Route::parse("/fund/"), None);
        assert_eq!(Route::parse("/fund/1/2"), None);
    }

    #[test]
    fn path_round_trips() {
        for route in [
            Route::Home,
            Route::Login,
            Route::Register,
            Route::SavedFunds,
            Route::Profile,
            Route::Fund {
                scheme_code: "120503".into(),
            },
            Route::Search {
                query: "HDFC".into(),
            },
        ] {
            assert_eq!(Route::parse(&route.path()), Some(route));
        }
    }
}
