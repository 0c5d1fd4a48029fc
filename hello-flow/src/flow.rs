//! The hello-world flow
//!
//! Greets a name, detects the runtime environment and logs both on one line.

pub use hello_core::domain::flow::HELLO_FLOW_NAME as FLOW_NAME;

use crate::context::FlowRunContext;
use crate::probe::EnvironmentProbe;
use crate::tasks::{self, DETECT_ENVIRONMENT_TASK, GREET_TASK};

/// Name greeted when none is supplied
pub const DEFAULT_NAME: &str = "World";

/// Runs the flow and returns the line it logged
pub fn hello_flow(ctx: &FlowRunContext, name: &str, probe: &dyn EnvironmentProbe) -> String {
    if name.trim().is_empty() {
        ctx.log_warning("No name supplied; the greeting will be blank".to_string());
    }

    let message = ctx.run_task(GREET_TASK, || tasks::greet(name));
    let environment = ctx.run_task(DETECT_ENVIRONMENT_TASK, || tasks::detect_environment(probe));

    let line = format!("{} (running on {})", message, environment);
    ctx.log_info(line.clone());
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tasks::tests::FakeProbe;
    use hello_core::domain::log::LogLevel;

    #[test]
    fn test_default_name_on_local_host() {
        let ctx = FlowRunContext::new(FLOW_NAME);
        let line = hello_flow(&ctx, DEFAULT_NAME, &FakeProbe::default());
        assert_eq!(line, "Hello, World! (running on local)");
    }

    #[test]
    fn test_named_run_on_kubernetes() {
        let ctx = FlowRunContext::new(FLOW_NAME);
        let line = hello_flow(&ctx, "Ada", &FakeProbe::kubernetes());
        assert_eq!(line, "Hello, Ada! (running on kubernetes)");
    }

    #[test]
    fn test_docker_run() {
        let ctx = FlowRunContext::new(FLOW_NAME);
        let line = hello_flow(&ctx, "Grace", &FakeProbe::docker());
        assert_eq!(line, "Hello, Grace! (running on docker)");
    }

    #[test]
    fn test_result_logged_once_at_info_after_tasks() {
        let ctx = FlowRunContext::new(FLOW_NAME);
        hello_flow(&ctx, "World", &FakeProbe::default());

        let logs = ctx.drain_logs();
        let info: Vec<_> = logs.iter().filter(|e| e.level == LogLevel::Info).collect();
        assert_eq!(info.len(), 1);
        assert_eq!(info[0].message, "Hello, World! (running on local)");

        let messages: Vec<_> = logs.iter().map(|e| e.message.as_str()).collect();
        assert_eq!(
            messages,
            vec![
                "Task run 'greet' started",
                "Task run 'greet' completed",
                "Task run 'detect_environment' started",
                "Task run 'detect_environment' completed",
                "Hello, World! (running on local)",
            ]
        );
    }

    #[test]
    fn test_blank_name_warns_but_still_greets() {
        let ctx = FlowRunContext::new(FLOW_NAME);
        let line = hello_flow(&ctx, " ", &FakeProbe::default());
        assert_eq!(line, "Hello,  ! (running on local)");

        let logs = ctx.drain_logs();
        assert_eq!(logs[0].level, LogLevel::Warning);
        assert!(logs.iter().filter(|e| e.level == LogLevel::Warning).count() == 1);
    }

    #[test]
    fn test_runs_are_idempotent() {
        let probe = FakeProbe::docker();
        let first = hello_flow(&FlowRunContext::new(FLOW_NAME), "Ada", &probe);
        let second = hello_flow(&FlowRunContext::new(FLOW_NAME), "Ada", &probe);
        assert_eq!(first, second);
    }
}
