use crate::areas::viewer::Viewer;

pub const EXAMPLE_OLD_LABEL: &str = "Original Code";
pub const EXAMPLE_NEW_LABEL: &str = "Modified Code";

pub const EXAMPLE_OLD: &str = r#"function calculateTotal(items) {
  return items
    .map(item => item.price * item.quantity)
    .reduce((a, b) => a + b, 0);
}

// Log the result
console.log("The total is: " + calculateTotal(items));"#;

pub const EXAMPLE_NEW: &str = r#"function calculateTotal(items) {
  // Add tax calculation
  return items
    .map(item => item.price * item.quantity * 1.1)
    .reduce((a, b) => a + b, 0);
}

// Format currency
const formatCurrency = (amount) => {
  return "$" + amount.toFixed(2);
};

// Log the result with formatting
console.log("The total is: " + formatCurrency(calculateTotal(items)));"#;

impl Viewer {
    /// Loads the built-in example pair into the session and renders it.
    pub fn example(&self) -> anyhow::Result<()> {
        self.session().set_texts(EXAMPLE_OLD, EXAMPLE_NEW);

        self.render(EXAMPLE_OLD_LABEL, EXAMPLE_NEW_LABEL)
    }
}
