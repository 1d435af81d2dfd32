//! Raw JSON payloads as a request layer would hand them to the engine.

#[cfg(test)]
mod request_payload_tests {
    use matchbook_rs::{MatchingEngine, OrderBookError, OrderRequest, ValidationError};
    use rust_decimal::Decimal;

    fn submit_json(
        engine: &mut MatchingEngine,
        json: &str,
    ) -> Result<matchbook_rs::SubmitResult, OrderBookError> {
        let request: OrderRequest = serde_json::from_str(json).unwrap();
        engine.submit(&request)
    }

    #[test]
    fn test_json_orders_match() {
        let mut engine = MatchingEngine::new("TEST");

        submit_json(&mut engine, r#"{"side":"sell","price":100,"quantity":5}"#).unwrap();
        let result =
            submit_json(&mut engine, r#"{"side":"buy","type":"market","quantity":2}"#).unwrap();

        assert_eq!(result.filled_quantity, 2);
        assert_eq!(engine.best_ask(), Some(Decimal::from(100)));
    }

    #[test]
    fn test_json_fractional_quantity_rejected() {
        let mut engine = MatchingEngine::new("TEST");

        let result = submit_json(&mut engine, r#"{"side":"buy","price":10,"quantity":0.5}"#);

        assert!(matches!(
            result,
            Err(OrderBookError::Validation(ValidationError::FractionalQuantity(_)))
        ));
        assert!(engine.get_book(20).bids.is_empty());
    }

    #[test]
    fn test_json_limit_without_price_rejected() {
        let mut engine = MatchingEngine::new("TEST");

        let result = submit_json(&mut engine, r#"{"side":"buy","price":null,"quantity":1}"#);

        assert_eq!(
            result.unwrap_err(),
            OrderBookError::Validation(ValidationError::MissingPrice)
        );
    }

    #[test]
    fn test_submit_result_serializes() {
        let mut engine = MatchingEngine::new("TEST");
        submit_json(&mut engine, r#"{"side":"sell","price":"20.5","quantity":3}"#).unwrap();
        let result =
            submit_json(&mut engine, r#"{"side":"buy","price":"21","quantity":4}"#).unwrap();

        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["filled_quantity"], 3);
        assert_eq!(value["rested_quantity"], 1);
        assert_eq!(value["trades"][0]["price"], "20.5");
        assert_eq!(value["trades"][0]["taker_side"], "buy");
        assert_eq!(value["order"]["type"], "limit");
    }
}
