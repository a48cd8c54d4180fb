//! End-to-end pricing scenarios for the standard menu

use pizza_core::{compute_receipt, standard_catalog, MissingChoice, OrderError, Price, Selection};
use rstest::rstest;

fn selection(crust: Option<&str>, size: Option<&str>, toppings: &[&str]) -> Selection {
    let mut selection = Selection::empty().with_toppings(toppings.iter().copied());
    selection.crust = crust.map(str::to_string);
    selection.size = size.map(str::to_string);
    selection
}

#[rstest]
#[case::thin_medium_two_toppings(
    Some("Thin"),
    Some("Medium"),
    &["Pepperoni", "Mushrooms"],
    1400,
    98,
    1498
)]
#[case::deep_dish_super_everything(
    Some("Deep-dish"),
    Some("Super"),
    &["Pepperoni", "Mushrooms", "Onions", "Sausage", "Bacon", "Extra Cheese"],
    2600,
    182,
    2782
)]
#[case::regular_small_one_topping(Some("Regular"), Some("Small"), &["Onions"], 900, 63, 963)]
fn test_priced_scenarios(
    #[case] crust: Option<&str>,
    #[case] size: Option<&str>,
    #[case] toppings: &[&str],
    #[case] subtotal: i64,
    #[case] tax: i64,
    #[case] total: i64,
) {
    let receipt = compute_receipt(&selection(crust, size, toppings), standard_catalog()).unwrap();

    assert_eq!(receipt.subtotal(), Price::from_cents(subtotal));
    assert_eq!(receipt.tax().rounded(), Price::from_cents(tax));
    assert_eq!(receipt.total().rounded(), Price::from_cents(total));
    assert_eq!(receipt.topping_lines().len(), toppings.len());
}

#[rstest]
#[case::no_toppings(Some("Regular"), Some("Small"), &[], vec![MissingChoice::Toppings])]
#[case::no_crust(None, Some("Large"), &["Bacon"], vec![MissingChoice::Crust])]
#[case::no_size(Some("Thin"), None, &["Onions"], vec![MissingChoice::Size])]
#[case::nothing(
    None,
    None,
    &[],
    vec![MissingChoice::Crust, MissingChoice::Size, MissingChoice::Toppings]
)]
fn test_incomplete_scenarios(
    #[case] crust: Option<&str>,
    #[case] size: Option<&str>,
    #[case] toppings: &[&str],
    #[case] missing: Vec<MissingChoice>,
) {
    let result = compute_receipt(&selection(crust, size, toppings), standard_catalog());

    assert_eq!(result, Err(OrderError::IncompleteSelection { missing }));
}

#[test]
fn test_full_receipt_text() {
    let everything = selection(
        Some("Deep-dish"),
        Some("Super"),
        &["Extra Cheese", "Bacon", "Sausage", "Onions", "Mushrooms", "Pepperoni"],
    );

    let text = compute_receipt(&everything, standard_catalog()).unwrap().render();

    let expected = concat!(
        "=========================================\n",
        "Type of Crust & Size           $ 20.00\n",
        "Deep-dish Crust, Super        \n",
        "Ingredient                     $  1.00\n",
        "Pepperoni                     \n",
        "Mushrooms                     \n",
        "Onions                        \n",
        "Sausage                       \n",
        "Bacon                         \n",
        "Extra Cheese                  \n",
        "\n",
        "Sub-total:                     $ 26.00\n",
        "Tax:                           $  1.82\n",
        "---------------------------------------------\n",
        "Total:                         $ 27.82\n",
        "=========================================\n",
    );
    assert_eq!(text, expected);
}
