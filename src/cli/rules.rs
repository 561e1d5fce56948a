use publishable::{FieldRule, Presence, RuleSet, Severity, Shape};

fn describe_presence(presence: Presence) -> &'static str {
    match presence {
        Presence::Required => "required",
        Presence::Marker => "required marker",
        Presence::Recommended => "recommended",
    }
}

fn describe_shape(shape: &Shape) -> &'static str {
    match shape {
        Shape::Any => "any value",
        Shape::String { .. } => "string",
        Shape::Object { .. } => "object",
        Shape::StringOrObject { .. } => "string or object",
    }
}

fn describe(rule: &FieldRule) -> String {
    let mut line = format!(
        "{:<14} {:<16} {}",
        rule.field,
        describe_presence(rule.presence),
        describe_shape(&rule.shape)
    );
    if !rule.sub_keys.is_empty() {
        let keys: Vec<String> = rule
            .sub_keys
            .iter()
            .map(|sub| match sub.severity {
                Severity::Error => sub.key.to_string(),
                Severity::Warning => format!("{}?", sub.key),
            })
            .collect();
        line.push_str(&format!(" {{{}}}", keys.join(", ")));
    }
    line
}

pub(crate) fn run(format: super::Format) {
    let rules = RuleSet::publishable();
    match format {
        super::Format::Text => {
            for rule in &rules {
                println!("{}", describe(rule));
            }
        }
        super::Format::Json => match serde_json::to_string_pretty(&rules) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("error: cannot serialize rules: {e}");
                std::process::exit(1);
            }
        },
    }
}
