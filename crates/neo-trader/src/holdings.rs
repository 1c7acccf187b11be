//! Holdings table rendering.

use neo_core::Holding;

/// Render holdings as an aligned text table.
pub fn render(holdings: &[Holding]) -> String {
    if holdings.is_empty() {
        return "No holdings found.".to_string();
    }

    let mut out = String::new();
    out.push_str(&format!(
        "{:<16} {:>8} {:>12} {:>12} {:>12}\n",
        "Symbol", "Qty", "Avg Price", "Close", "P&L"
    ));
    for h in holdings {
        out.push_str(&format!(
            "{:<16} {:>8} {:>12.2} {:>12.2} {:>12.2}\n",
            h.symbol,
            h.quantity,
            h.average_price,
            h.closing_price,
            h.pnl()
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_render_rows() {
        let holdings = vec![
            Holding {
                symbol: "TATASTEEL".to_string(),
                quantity: 10,
                average_price: dec!(100.00),
                closing_price: dec!(105.00),
            },
            Holding {
                symbol: "RELIANCE".to_string(),
                quantity: 5,
                average_price: dec!(2000.00),
                closing_price: dec!(2050.00),
            },
        ];
        let out = render(&holdings);
        assert!(out.contains("TATASTEEL"));
        assert!(out.contains("100.00"));
        assert!(out.contains("105.00"));
        assert!(out.contains("RELIANCE"));
        assert!(out.contains("2000.00"));
        assert!(out.contains("250.00")); // P&L
    }

    #[test]
    fn test_render_empty() {
        assert_eq!(render(&[]), "No holdings found.");
    }
}
