//! Server-rendered HTML: the login form and the payments dashboard.

use std::fmt::Write;

use pointage_core::dates::format_day;
use pointage_db::models::payment::EmployeePayment;

use crate::auth::session::Principal;

/// Static login form. Posts JSON to `/api/login` and moves to the
/// dashboard once the session cookie is set.
pub const LOGIN_PAGE: &str = r#"<!DOCTYPE html>
<html lang="fr">
<head>
<meta charset="utf-8">
<title>Connexion</title>
</head>
<body>
<h1>Connexion</h1>
<form id="login">
  <label>Utilisateur <input name="username" autocomplete="username" required></label>
  <label>Mot de passe <input name="password" type="password" autocomplete="current-password" required></label>
  <button type="submit">Se connecter</button>
</form>
<p id="error" hidden>Identifiants invalides</p>
<script>
document.getElementById("login").addEventListener("submit", async (event) => {
  event.preventDefault();
  const form = new FormData(event.target);
  const response = await fetch("/api/login", {
    method: "POST",
    headers: { "Content-Type": "application/json" },
    credentials: "same-origin",
    body: JSON.stringify({ username: form.get("username"), password: form.get("password") }),
  });
  if (response.ok) {
    window.location.assign("/dashboard");
  } else {
    document.getElementById("error").hidden = false;
  }
});
</script>
</body>
</html>
"#;

/// Escape text for use inside HTML element content or attribute values.
pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

/// Shown for null columns, e.g. an unpaid employee under a left join.
const EMPTY_CELL: &str = "-";

fn cell(value: Option<&str>) -> String {
    value.map_or_else(|| EMPTY_CELL.to_string(), escape_html)
}

/// Render the payments table for a signed-in user.
pub fn render_dashboard(payments: &[EmployeePayment], user: &Principal) -> String {
    let mut rows = String::new();
    for p in payments {
        let amount = p.amount.map(|a| format!("{a:.2}"));
        // Writing to a String cannot fail.
        let _ = writeln!(
            rows,
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
            escape_html(&p.nom),
            escape_html(&p.prenom),
            escape_html(&p.kind),
            cell(p.payment_type.as_deref()),
            cell(amount.as_deref()),
            cell(p.period.as_deref()),
            format_day(p.date),
        );
    }
    if payments.is_empty() {
        rows.push_str("<tr><td colspan=\"7\">Aucun paiement</td></tr>\n");
    }

    format!(
        r#"<!DOCTYPE html>
<html lang="fr">
<head>
<meta charset="utf-8">
<title>Tableau de bord</title>
</head>
<body>
<header>
<h1>Paiements des employés</h1>
<p>Connecté : {user} <a href="/logout">Déconnexion</a></p>
</header>
<table>
<thead>
<tr><th>Nom</th><th>Prénom</th><th>Type</th><th>Paiement</th><th>Montant</th><th>Période</th><th>Date</th></tr>
</thead>
<tbody>
{rows}</tbody>
</table>
</body>
</html>
"#,
        user = escape_html(&user.user_id),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn admin() -> Principal {
        Principal {
            user_id: "ADMIN001".into(),
            role: "admin".into(),
        }
    }

    fn payment(nom: &str, amount: Option<f64>, date: Option<i64>) -> EmployeePayment {
        EmployeePayment {
            nom: nom.into(),
            prenom: "Ama".into(),
            kind: "hourly".into(),
            employee_name: amount.map(|_| "Koffi Ama".into()),
            payment_type: amount.map(|_| "salaire".into()),
            amount,
            period: amount.map(|_| "2024-03".into()),
            date,
        }
    }

    #[test]
    fn escapes_markup() {
        assert_eq!(
            escape_html(r#"<b onclick="x">&'"#),
            "&lt;b onclick=&quot;x&quot;&gt;&amp;&#x27;"
        );
    }

    #[test]
    fn renders_payment_row() {
        let html = render_dashboard(&[payment("Koffi", Some(150000.0), Some(1_709_640_000_000))], &admin());
        assert!(html.contains("<td>Koffi</td>"));
        assert!(html.contains("<td>150000.00</td>"));
        assert!(html.contains("<td>05/03/2024</td>"));
        assert!(html.contains("ADMIN001"));
        assert!(!html.contains("Aucun paiement"));
    }

    #[test]
    fn null_payment_columns_render_placeholder() {
        let html = render_dashboard(&[payment("Agbo", None, None)], &admin());
        assert!(html.contains("<td>Agbo</td><td>Ama</td><td>hourly</td><td>-</td><td>-</td><td>-</td><td>-</td>"));
    }

    #[test]
    fn data_is_escaped() {
        let html = render_dashboard(&[payment("<script>", Some(1.0), Some(0))], &admin());
        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("<td><script>"));
    }

    #[test]
    fn empty_table_has_placeholder_row() {
        assert!(render_dashboard(&[], &admin()).contains("Aucun paiement"));
    }
}
