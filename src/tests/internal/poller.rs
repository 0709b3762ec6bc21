//! 轮询器行为测试：守卫、逐轮刷新、完成吸附、致命错误、容错路径、anticache。
//!
//! 全部走假页面 + 脚本化传输，不触网。

use std::sync::{Arc, Mutex};

use crate::poller::{
    PollError, PollOutcome, PollPhase, ProgressPoller, ProgressUpdate,
};
use crate::tests::{resp, test_config, FakePage, ScriptedTransport};
use crate::transport::traits::ProgressTransport;

fn build_poller(
    page: &FakePage,
    transport: &Arc<ScriptedTransport>,
) -> ProgressPoller {
    ProgressPoller::new(
        test_config(),
        Arc::new(page.clone()),
        Arc::clone(transport) as Arc<dyn ProgressTransport>,
    )
}

#[tokio::test]
async fn guard_skips_when_file_input_empty() {
    let page = FakePage::new().with_input("file", "");
    let transport = Arc::new(ScriptedTransport::ok_bodies(&[]));

    let mut poller = ProgressPoller::new(
        test_config().file_input("file"),
        Arc::new(page.clone()),
        Arc::clone(&transport) as Arc<dyn ProgressTransport>,
    );
    let outcome = poller.start().await.unwrap();

    assert_eq!(outcome, PollOutcome::Skipped);
    let state = page.snapshot();
    assert!(state.text_writes.is_empty(), "不应有任何文本写入");
    assert!(state.bar_writes.is_empty(), "不应有任何宽度写入");
    assert!(state.visibility.is_empty(), "不应有任何可见性切换");
    assert!(transport.requested_urls().is_empty(), "不应发出任何请求");
    assert_eq!(poller.get_phase(), Some(PollPhase::Idle));
}

#[tokio::test]
async fn guard_skips_when_file_input_missing() {
    // 页面上根本没有这个输入框：同样视为守卫未通过
    let page = FakePage::new();
    let transport = Arc::new(ScriptedTransport::ok_bodies(&[]));

    let mut poller = ProgressPoller::new(
        test_config().file_input("file"),
        Arc::new(page.clone()),
        Arc::clone(&transport) as Arc<dyn ProgressTransport>,
    );
    let outcome = poller.start().await.unwrap();

    assert_eq!(outcome, PollOutcome::Skipped);
    assert!(transport.requested_urls().is_empty());
}

#[tokio::test]
async fn guard_passes_when_file_input_has_value() {
    let page = FakePage::new().with_input("file", r"C:\upload\a.bin");
    let transport = Arc::new(ScriptedTransport::ok_bodies(&[
        "x|100|10000|10000|0|00:00",
    ]));

    let mut poller = ProgressPoller::new(
        test_config().file_input("file"),
        Arc::new(page.clone()),
        Arc::clone(&transport) as Arc<dyn ProgressTransport>,
    );
    let outcome = poller.start().await.unwrap();

    assert_eq!(outcome, PollOutcome::Completed);
    assert_eq!(transport.requested_urls().len(), 1);
}

#[tokio::test]
async fn updates_bar_and_status_once_per_response_then_completes() {
    crate::tests::init_test_logging();

    let page = FakePage::new();
    let transport = Arc::new(ScriptedTransport::ok_bodies(&[
        "x|42|4200|10000|500kb/s|00:10",
        "x|100|10000|10000|0|00:00",
    ]));

    let mut poller = build_poller(&page, &transport);
    let outcome = poller.start().await.unwrap();
    assert_eq!(outcome, PollOutcome::Completed);

    let state = page.snapshot();

    // 启动重置 0% → 第 1 轮 42% → 第 2 轮载荷刷新 100% → 完成吸附 100%
    let widths: Vec<&str> =
        state.bar_writes.iter().map(|(_, w)| w.as_str()).collect();
    assert_eq!(widths, vec!["0%", "42%", "100%", "100%"]);

    let texts: Vec<&str> =
        state.text_writes.iter().map(|(_, t)| t.as_str()).collect();
    assert_eq!(
        texts,
        vec![
            "Upload starting...",
            "42% finished, 4200 of 10000 at 500kb/s; 00:10",
            "100% finished, 10000 of 10000 at 0; 00:00",
        ]
    );

    // 两份响应对应两次请求，终态后不再轮询
    assert_eq!(transport.requested_urls().len(), 2);

    // 完成后两个元素都隐藏
    assert_eq!(state.visibility.get("status"), Some(&false));
    assert_eq!(state.visibility.get("bar"), Some(&false));

    assert_eq!(poller.get_phase(), Some(PollPhase::Done));
    assert_eq!(poller.get_percent(), 100);
}

#[tokio::test]
async fn completes_in_single_cycle_when_first_response_is_full() {
    let page = FakePage::new();
    let transport = Arc::new(ScriptedTransport::ok_bodies(&[
        "x|100|10000|10000|0|00:00",
    ]));

    let mut poller = build_poller(&page, &transport);
    let outcome = poller.start().await.unwrap();

    assert_eq!(outcome, PollOutcome::Completed);
    assert_eq!(transport.requested_urls().len(), 1);

    let state = page.snapshot();
    let last_width = state.bar_writes.last().map(|(_, w)| w.as_str());
    assert_eq!(last_width, Some("100%"));
    assert_eq!(state.visibility.get("status"), Some(&false));
    assert_eq!(state.visibility.get("bar"), Some(&false));
    assert_eq!(poller.get_phase(), Some(PollPhase::Done));
}

#[tokio::test]
async fn bad_status_alerts_once_and_stops() {
    let page = FakePage::new();
    let transport = Arc::new(ScriptedTransport::new(vec![resp(500, "")]));

    let mut poller = build_poller(&page, &transport);
    let err = poller.start().await.unwrap_err();

    assert!(matches!(err, PollError::BadStatus(500)));
    let state = page.snapshot();
    assert_eq!(state.alerts.len(), 1, "致命错误恰好告警一次");
    assert_eq!(transport.requested_urls().len(), 1, "失败后不再轮询");
    assert_eq!(poller.get_phase(), Some(PollPhase::Failed));
}

#[tokio::test]
async fn transport_error_alerts_once_and_stops() {
    let page = FakePage::new();
    let transport = Arc::new(ScriptedTransport::new(vec![Err(
        PollError::TransportUnavailable,
    )]));

    let mut poller = build_poller(&page, &transport);
    let err = poller.start().await.unwrap_err();

    assert!(matches!(err, PollError::TransportUnavailable));
    let state = page.snapshot();
    assert_eq!(state.alerts, vec!["无法创建 HTTP 客户端".to_string()]);
    assert_eq!(poller.get_phase(), Some(PollPhase::Failed));
}

#[tokio::test]
async fn empty_completed_field_skips_refresh_but_keeps_polling() {
    let page = FakePage::new();
    let transport = Arc::new(ScriptedTransport::ok_bodies(&[
        "x|50||10000|1mb/s|00:30",
        "x|100|10000|10000|0|00:00",
    ]));

    let mut poller = build_poller(&page, &transport);
    let outcome = poller.start().await.unwrap();
    assert_eq!(outcome, PollOutcome::Completed);

    let state = page.snapshot();
    let widths: Vec<&str> =
        state.bar_writes.iter().map(|(_, w)| w.as_str()).collect();
    // 第 1 轮载荷为空：没有 50% 这一笔
    assert_eq!(widths, vec!["0%", "100%", "100%"]);
    assert_eq!(transport.requested_urls().len(), 2);
}

#[tokio::test]
async fn malformed_body_is_tolerated() {
    let page = FakePage::new();
    let transport = Arc::new(ScriptedTransport::ok_bodies(&[
        "garbage",
        "x|100|10000|10000|0|00:00",
    ]));

    let mut poller = build_poller(&page, &transport);
    let outcome = poller.start().await.unwrap();

    assert_eq!(outcome, PollOutcome::Completed);
    assert_eq!(transport.requested_urls().len(), 2);
}

#[tokio::test]
async fn every_request_carries_a_fresh_anticache_value() {
    let page = FakePage::new();
    let transport = Arc::new(ScriptedTransport::ok_bodies(&[
        "x|10|1000|10000|1mb/s|00:09",
        "x|100|10000|10000|0|00:00",
    ]));

    let mut poller = build_poller(&page, &transport);
    poller.start().await.unwrap();

    let values: Vec<String> = transport
        .requested_urls()
        .iter()
        .map(|url| {
            url.query_pairs()
                .find(|(k, _)| k == "anticache")
                .map(|(_, v)| v.into_owned())
                .expect("每次请求都必须带 anticache 参数")
        })
        .collect();

    assert_eq!(values.len(), 2);
    assert_ne!(values[0], values[1], "anticache 取值应逐次变化");
}

#[tokio::test]
async fn hooks_observe_updates_and_terminal_phase() {
    let page = FakePage::new();
    let transport = Arc::new(ScriptedTransport::ok_bodies(&[
        "x|42|4200|10000|500kb/s|00:10",
        "x|100|10000|10000|0|00:00",
    ]));

    let updates: Arc<Mutex<Vec<ProgressUpdate>>> =
        Arc::new(Mutex::new(Vec::new()));
    let terminals: Arc<Mutex<Vec<PollPhase>>> =
        Arc::new(Mutex::new(Vec::new()));

    let updates_log = Arc::clone(&updates);
    let terminals_log = Arc::clone(&terminals);

    let mut poller = build_poller(&page, &transport)
        .with_on_update_hook(move |u| {
            updates_log.lock().unwrap().push(u.clone());
        })
        .with_on_terminal_hook(move |p| {
            terminals_log.lock().unwrap().push(p.clone());
        });

    poller.start().await.unwrap();

    let percents: Vec<Option<u32>> =
        updates.lock().unwrap().iter().map(|u| u.percent).collect();
    assert_eq!(percents, vec![Some(42), Some(100)]);
    assert_eq!(*terminals.lock().unwrap(), vec![PollPhase::Done]);
}

#[tokio::test]
async fn subscribe_phase_sees_terminal_state() {
    let page = FakePage::new();
    let transport = Arc::new(ScriptedTransport::ok_bodies(&[
        "x|100|10000|10000|0|00:00",
    ]));

    let mut poller = build_poller(&page, &transport);
    poller.start().await.unwrap();

    let seen: Arc<Mutex<Vec<PollPhase>>> = Arc::new(Mutex::new(Vec::new()));
    let seen_log = Arc::clone(&seen);
    poller.subscribe_phase(true, move |phase| {
        seen_log.lock().unwrap().push(phase.clone());
    });

    // 订阅任务是 spawn 出来的，稍等它跑起来
    tokio::time::sleep(std::time::Duration::from_millis(50)).await;
    assert!(seen.lock().unwrap().contains(&PollPhase::Done));
}
