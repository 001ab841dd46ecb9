use super::style;
use crate::transcript::StructuredReply;

/// Render one structured reply as plan / execution / verification sections.
/// Plain text plus terminal styling; markdown inside `execution` is printed
/// as-is.
pub fn render_reply(reply: &StructuredReply) -> String {
    let mut out = String::new();

    if !reply.plan.is_empty() {
        out.push_str(&style::header("PLAN"));
        out.push('\n');
        for (index, step) in reply.plan.iter().enumerate() {
            out.push_str(&format!("  {} {step}\n", style::accent(index + 1)));
        }
        out.push('\n');
    }

    out.push_str(&style::header("EXECUTION"));
    out.push('\n');
    out.push_str(&reply.execution);
    out.push_str("\n\n");

    out.push_str(&style::header("VERIFICATION"));
    out.push('\n');
    out.push_str(&style::yellow(&reply.verification));
    out.push('\n');

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_all_three_sections() {
        let reply = StructuredReply {
            plan: vec!["Research".into(), "Draft".into()],
            execution: "## Result\nbody".into(),
            verification: "Limited to Q1 data.".into(),
        };
        let rendered = render_reply(&reply);
        assert!(rendered.contains("PLAN"));
        assert!(rendered.contains("Research"));
        assert!(rendered.contains("## Result"));
        assert!(rendered.contains("Limited to Q1 data."));
    }

    #[test]
    fn empty_plan_omits_plan_section() {
        let reply = StructuredReply {
            plan: vec![],
            execution: "e".into(),
            verification: "v".into(),
        };
        let rendered = render_reply(&reply);
        assert!(!rendered.contains("PLAN"));
        assert!(rendered.contains("EXECUTION"));
    }
}
