use arith_jsonrpc::domain::methods::{add, subtract, sum};
use arith_jsonrpc::{handle_line, serve};
use proptest::prelude::*;
use serde_json::{json, Value};
use tokio::runtime::Runtime;

fn call(method: &str, params: Value, id: i64) -> Value {
    let request = json!({"jsonrpc": "2.0", "method": method, "params": params, "id": id});
    serde_json::from_str(&handle_line(&request.to_string())).expect("response is valid json")
}

proptest! {
    #[test]
    fn add_returns_integer_sum(a in any::<i64>(), b in any::<i64>()) {
        let response = call("add", json!([a, b]), 1);
        let expected = i128::from(a) + i128::from(b);

        prop_assert_eq!(&response["id"], &json!(1));
        let expected = match (i64::try_from(expected), u64::try_from(expected)) {
            (Ok(exact), _) => json!(exact),
            (_, Ok(large)) => json!(large),
            _ => json!(expected as f64),
        };
        prop_assert_eq!(&response["result"], &expected);
    }

    #[test]
    fn add_returns_float_sum(a in -1.0e12..1.0e12f64, b in -1.0e12..1.0e12f64) {
        prop_assert_eq!(add(json!([a, b]), &json!(1)), Ok(json!(a + b)));
    }

    #[test]
    fn sum_returns_arithmetic_total(xs in prop::collection::vec(-1_000_000i64..1_000_000, 0..32)) {
        let response = call("sum", json!(xs), 2);
        let expected: i64 = xs.iter().sum();

        prop_assert_eq!(&response["result"], &json!(expected));
        prop_assert_eq!(sum(json!(xs), &json!(2)), Ok(json!(expected)));
    }

    #[test]
    fn subtract_named_and_positional_agree(a in any::<i32>(), b in any::<i32>()) {
        let named = subtract(json!({"minuend": a, "subtrahend": b}), &json!(3));
        let positional = subtract(json!([a, b]), &json!(3));
        let expected = json!(i64::from(a) - i64::from(b));

        prop_assert_eq!(named.clone(), positional);
        prop_assert_eq!(named, Ok(expected));
    }

    #[test]
    fn add_of_float_and_zero_is_identity(
        x in any::<f64>().prop_filter("finite", |x| x.is_finite())
    ) {
        let response = call("add", json!([x, 0]), 4);
        prop_assert_eq!(response["result"].as_f64(), Some(x + 0.0));
    }

    #[test]
    fn arbitrary_bytes_never_stop_the_transport(
        garbage in prop::collection::vec(
            any::<u8>().prop_filter("no newline", |byte| *byte != b'\n'),
            1..64,
        )
    ) {
        let rt = Runtime::new().unwrap();
        let mut input = garbage.clone();
        input.push(b'\n');
        input.extend_from_slice(br#"{"jsonrpc":"2.0","method":"sum","params":[1,2],"id":"last"}"#);
        input.push(b'\n');

        let mut output = Vec::new();
        let summary = rt
            .block_on(serve(input.as_slice(), &mut output))
            .expect("serve survives arbitrary bytes");
        let output = String::from_utf8(output).expect("utf-8 output");
        let last = output.lines().last().expect("at least one response");

        prop_assert_eq!(last, r#"{"jsonrpc":"2.0","id":"last","result":3}"#);
        prop_assert!(summary.requests >= 1 && summary.requests <= 2);
    }

    #[test]
    fn arbitrary_input_always_yields_one_envelope(raw in "\\PC*") {
        let response: Value =
            serde_json::from_str(&handle_line(&raw)).expect("response is valid json");
        let object = response.as_object().expect("response is an object");

        prop_assert_eq!(&object["jsonrpc"], &json!("2.0"));
        prop_assert!(object.contains_key("id"));
        prop_assert!(object.contains_key("result") != object.contains_key("error"));
    }
}
