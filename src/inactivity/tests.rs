use super::{IdleDeadline, IdleStatus};

#[test]
fn expires_without_activity() {
    let deadline = IdleDeadline::new(1_000.0, 300_000);
    assert_eq!(deadline.status(301_000.0), IdleStatus::Expired);
    assert_eq!(deadline.status(400_000.0), IdleStatus::Expired);
}

#[test]
fn activity_pushes_deadline() {
    let mut deadline = IdleDeadline::new(0.0, 300_000);
    deadline.record_activity(200_000.0);

    // 原定到期时刻不再视为闲置，剩余时间为推后的部分
    assert_eq!(
        deadline.status(300_000.0),
        IdleStatus::Pending {
            remaining_ms: 200_000
        }
    );
    // 新期限之后才判定为闲置
    assert_eq!(deadline.status(500_000.0), IdleStatus::Expired);
}

#[test]
fn repeated_activity_keeps_pushing() {
    let mut deadline = IdleDeadline::new(0.0, 1_000);
    for t in [500.0, 1_200.0, 1_900.0] {
        deadline.record_activity(t);
    }
    assert_eq!(
        deadline.status(2_000.0),
        IdleStatus::Pending { remaining_ms: 900 }
    );
    assert_eq!(deadline.status(2_900.0), IdleStatus::Expired);
}

#[test]
fn remaining_rounds_up() {
    let deadline = IdleDeadline::new(0.0, 1_000);
    assert_eq!(
        deadline.status(999.5),
        IdleStatus::Pending { remaining_ms: 1 }
    );
}
