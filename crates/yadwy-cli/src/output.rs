// Output formatting and styling

use colored::Colorize;
use yadwy_api::{Category, Product, Province, SellerOrder, StatusKind, Tone};
use yadwy_auth::CurrentUser;

/// Output styling configuration
pub struct OutputStyle {
    pub use_colors: bool,
}

impl Default for OutputStyle {
    fn default() -> Self {
        Self {
            use_colors: atty::is(atty::Stream::Stdout),
        }
    }
}

impl OutputStyle {
    pub fn plain() -> Self {
        Self { use_colors: false }
    }

    /// Format success message
    pub fn success(&self, msg: &str) -> String {
        if self.use_colors {
            format!("{} {}", "✓".green().bold(), msg)
        } else {
            format!("✓ {}", msg)
        }
    }

    /// Format error message
    pub fn error(&self, msg: &str) -> String {
        if self.use_colors {
            format!("{} {}", "✗".red().bold(), msg)
        } else {
            format!("✗ {}", msg)
        }
    }

    pub fn warning(&self, msg: &str) -> String {
        if self.use_colors {
            format!("{} {}", "⚠".yellow(), msg)
        } else {
            format!("⚠ {}", msg)
        }
    }

    pub fn info(&self, msg: &str) -> String {
        if self.use_colors {
            format!("{} {}", "ℹ".blue(), msg)
        } else {
            format!("ℹ {}", msg)
        }
    }

    pub fn header(&self, title: &str) -> String {
        if self.use_colors {
            title.bold().to_string()
        } else {
            title.to_string()
        }
    }

    fn dim(&self, text: &str) -> String {
        if self.use_colors {
            text.dimmed().to_string()
        } else {
            text.to_string()
        }
    }

    /// Status label colored by its tone
    pub fn status(&self, kind: StatusKind, status: &str) -> String {
        let label = kind.label(status);
        if !self.use_colors {
            return label.into_owned();
        }
        match kind.tone(status) {
            Tone::Success => label.green().to_string(),
            Tone::Warning => label.yellow().to_string(),
            Tone::Info => label.blue().to_string(),
            Tone::Danger => label.red().to_string(),
            Tone::Muted => label.dimmed().to_string(),
        }
    }

    pub fn order_row(&self, order: &SellerOrder) -> String {
        format!(
            "#{:<10} {:<20} {:>3} item(s) {:>10.2}  {}",
            order.id,
            self.status(StatusKind::Fulfillment, &order.status),
            order.items.len(),
            order.total_amount(),
            self.dim(order.created_at.as_deref().unwrap_or("")),
        )
    }

    pub fn order_detail(&self, order: &SellerOrder) -> String {
        let mut lines = vec![
            self.header(&format!("Order #{}", order.id)),
            format!("Status:  {}", self.status(StatusKind::Fulfillment, &order.status)),
        ];
        if let Some(parent) = &order.order_id {
            lines.push(format!("Parent:  #{}", parent));
        }
        if let Some(created) = &order.created_at {
            lines.push(format!("Placed:  {}", created));
        }
        if let Some(address) = &order.shipping_address {
            lines.push(format!(
                "Ship to: {}, {}, {} ({})",
                address.customer_name, address.address, address.province, address.phone
            ));
        }
        lines.push(String::new());
        for item in &order.items {
            let name = item
                .product_name
                .clone()
                .or_else(|| item.product_id.map(|id| format!("product {}", id)))
                .unwrap_or_else(|| "item".to_string());
            lines.push(format!(
                "  {:>3} x {:<30} {:>10.2}",
                item.quantity,
                name,
                item.line_total()
            ));
        }
        lines.push(format!("Total: {:.2}", order.total_amount()));
        lines.join("\n")
    }

    pub fn product_row(&self, product: &Product) -> String {
        let visibility = if product.visible { "active" } else { "draft" };
        format!(
            "{:<6} {:<32} {:>10.2}  {}",
            product.id,
            product.name,
            product.price,
            self.status(StatusKind::Product, visibility),
        )
    }

    /// Category tree, children indented under their parent
    pub fn category_tree(&self, categories: &[Category]) -> String {
        fn walk(style: &OutputStyle, category: &Category, depth: usize, out: &mut Vec<String>) {
            out.push(format!(
                "{}{} {} {}",
                "  ".repeat(depth),
                category.id,
                category.name,
                style.dim(&format!("({})", category.slug)),
            ));
            for child in &category.children {
                walk(style, child, depth + 1, out);
            }
        }

        let mut out = Vec::new();
        for category in categories {
            walk(self, category, 0, &mut out);
        }
        out.join("\n")
    }

    pub fn province_row(&self, province: &Province) -> String {
        let marker = if province.is_active {
            String::new()
        } else {
            format!(" {}", self.dim("(inactive)"))
        };
        format!(
            "{:<4} {:<20} {:<20} {:>8.2}{}",
            province.id, province.name.en, province.name.ar, province.shipping_fee, marker
        )
    }

    pub fn user(&self, user: &CurrentUser) -> String {
        format!(
            "{}\nAccount: {}\nRoles:   {}",
            self.header(&user.phone_number),
            user.id,
            user.roles.join(", ")
        )
    }
}

/// Print an error to stderr
pub fn print_error(msg: &str) {
    let style = OutputStyle::default();
    eprintln!("{}", style.error(msg));
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_output_style_without_colors() {
        let style = OutputStyle::plain();
        assert_eq!(style.success("test"), "✓ test");
        assert_eq!(style.error("test"), "✗ test");
        assert_eq!(style.warning("test"), "⚠ test");
        assert_eq!(style.info("test"), "ℹ test");
    }

    #[test]
    fn test_status_labels() {
        let style = OutputStyle::plain();
        assert_eq!(style.status(StatusKind::Fulfillment, "on_hold"), "On hold");
        assert_eq!(style.status(StatusKind::Fulfillment, "SHIPPED"), "SHIPPED");
    }

    #[test]
    fn test_order_detail() {
        let order: SellerOrder = serde_json::from_value(json!({
            "id": 12,
            "status": "fulfilled",
            "items": [{"productId": 3, "productName": "Clay mug", "quantity": 2, "price": 60.0}]
        }))
        .unwrap();
        let detail = OutputStyle::plain().order_detail(&order);
        assert!(detail.starts_with("Order #12"));
        assert!(detail.contains("Status:  Fulfilled"));
        assert!(detail.contains("Clay mug"));
        assert!(detail.ends_with("Total: 120.00"));
    }

    #[test]
    fn test_category_tree_indentation() {
        let categories: Vec<Category> = serde_json::from_value(json!([
            {"id": 1, "name": "Home", "slug": "home",
             "children": [{"id": 2, "name": "Kitchen", "slug": "kitchen", "parentId": 1}]}
        ]))
        .unwrap();
        let tree = OutputStyle::plain().category_tree(&categories);
        assert_eq!(tree, "1 Home (home)\n  2 Kitchen (kitchen)");
    }
}
