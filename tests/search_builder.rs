use lodging_data::{DEFAULT_RESULT_LIMIT, PropertySearch, SqlValue, build_search_query};
use regex::Regex;

/// One search per bit: city, owner, min price, max price, min rating.
fn search_from_mask(mask: u32) -> PropertySearch {
    PropertySearch {
        city: (mask & 1 != 0).then(|| "van".to_string()),
        owner_id: (mask & 2 != 0).then_some(7),
        minimum_price_per_night: (mask & 4 != 0).then_some(50.0),
        maximum_price_per_night: (mask & 8 != 0).then_some(200.0),
        minimum_rating: (mask & 16 != 0).then_some(4.0),
    }
}

#[test]
fn placeholders_are_contiguous_for_every_filter_combination() {
    let placeholder = Regex::new(r"\$(\d+)").unwrap();
    for mask in 0..32u32 {
        let search = search_from_mask(mask);
        let qp = build_search_query(&search, DEFAULT_RESULT_LIMIT);

        let ordinals: Vec<usize> = placeholder
            .captures_iter(&qp.query)
            .map(|c| c[1].parse().unwrap())
            .collect();
        let expected: Vec<usize> = (1..=qp.params.len()).collect();
        assert_eq!(
            ordinals, expected,
            "mask {mask:05b} produced misaligned placeholders in:\n{}",
            qp.query
        );
    }
}

#[test]
fn where_and_having_presence_track_their_filters() {
    for mask in 0..32u32 {
        let search = search_from_mask(mask);
        let qp = build_search_query(&search, DEFAULT_RESULT_LIMIT);

        let wants_where = mask & 0b01111 != 0;
        let wants_having = mask & 0b10000 != 0;
        assert_eq!(qp.query.contains("WHERE"), wants_where, "mask {mask:05b}");
        assert_eq!(qp.query.contains("HAVING"), wants_having, "mask {mask:05b}");

        // HAVING must follow GROUP BY when present.
        if wants_having {
            let group_by = qp.query.find("GROUP BY").unwrap();
            let having = qp.query.find("HAVING").unwrap();
            assert!(group_by < having, "mask {mask:05b}");
        }
    }
}

#[test]
fn no_filters_yields_no_where_and_only_the_limit() {
    let qp = build_search_query(&PropertySearch::default(), DEFAULT_RESULT_LIMIT);
    assert!(!qp.query.contains("WHERE"));
    assert!(qp.query.contains("GROUP BY properties.id"));
    assert!(qp.query.ends_with("LIMIT $1"));
    assert_eq!(qp.params, vec![SqlValue::Int(DEFAULT_RESULT_LIMIT)]);
}

#[test]
fn city_price_and_rating_bind_in_declaration_order() {
    let search = PropertySearch {
        city: Some("van".to_string()),
        minimum_price_per_night: Some(50.0),
        minimum_rating: Some(4.0),
        ..PropertySearch::default()
    };
    let qp = build_search_query(&search, 5);

    assert!(qp.query.contains("WHERE properties.city LIKE $1"));
    assert!(qp.query.contains("properties.cost_per_night >= $2"));
    assert!(qp.query.contains("HAVING avg(property_reviews.rating)::float8 >= $3"));
    assert!(qp.query.contains("ORDER BY properties.cost_per_night"));
    assert!(qp.query.ends_with("LIMIT $4"));
    assert_eq!(
        qp.params,
        vec![
            SqlValue::Text("%van%".to_string()),
            SqlValue::Int(5000),
            SqlValue::Float(4.0),
            SqlValue::Int(5),
        ],
    );
}

#[test]
fn equal_minimum_and_maximum_bind_identical_minor_units() {
    let search = PropertySearch {
        minimum_price_per_night: Some(123.45),
        maximum_price_per_night: Some(123.45),
        ..PropertySearch::default()
    };
    let qp = build_search_query(&search, DEFAULT_RESULT_LIMIT);
    assert_eq!(qp.params[0], SqlValue::Int(12345));
    assert_eq!(qp.params[1], SqlValue::Int(12345));
}

#[test]
fn owner_filter_is_independent_of_the_others() {
    let search = PropertySearch {
        owner_id: Some(99),
        ..PropertySearch::default()
    };
    let qp = build_search_query(&search, DEFAULT_RESULT_LIMIT);
    assert!(qp.query.contains("WHERE properties.owner_id = $1"));
    assert_eq!(
        qp.params,
        vec![SqlValue::Int(99), SqlValue::Int(DEFAULT_RESULT_LIMIT)],
    );
}
