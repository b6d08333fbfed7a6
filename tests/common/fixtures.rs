//! Static fixtures used across harnesses.

/// Timestamps near day boundaries in several offsets. Each entry is
/// `(rfc3339, (year, month, day))` with the calendar date local to the
/// timestamp's own offset.
pub const BOUNDARY_TIMES: &[(&str, (i32, u32, u32))] = &[
    ("2024-01-05T00:00:00Z", (2024, 1, 5)),
    ("2024-01-05T23:59:59.999Z", (2024, 1, 5)),
    ("2024-01-05T23:30:00-05:00", (2024, 1, 5)),
    ("2024-01-06T00:30:00+09:00", (2024, 1, 6)),
    ("2024-02-29T12:00:00+01:00", (2024, 2, 29)),
    ("2023-12-31T23:59:59+14:00", (2023, 12, 31)),
];

/// Bodies that `POST /log/` must reject.
pub const MALFORMED_CREATE_BODIES: &[&str] = &[
    "",
    "not json",
    r#"{"server_id":"srv1","content":"x","source_ip":"1.2.3.4"}"#,
    r#"{"server_id":"srv1","content":"x","source_ip":"1.2.3.4","log_time":"yesterday"}"#,
    r#"[1, 2, 3]"#,
];

/// `journalctl -o json` lines as sshd writes them. The first three carry a
/// client address; the rest must be skipped by the shipper.
pub const JOURNAL_SSHD: &[&str] = &[
    r#"{"__REALTIME_TIMESTAMP":"1704448800200000","_HOSTNAME":"bastion","_PID":"4242","_COMM":"sshd","MESSAGE":"Failed password for invalid user admin from 10.0.0.1 port 54321 ssh2","_SOURCE_REALTIME_TIMESTAMP":"1704448800100000"}"#,
    r#"{"__REALTIME_TIMESTAMP":"1704448860200000","_HOSTNAME":"bastion","_PID":"4243","_COMM":"sshd","MESSAGE":"Accepted publickey for deploy from 192.168.1.20 port 50022 ssh2","_SOURCE_REALTIME_TIMESTAMP":"1704448860100000"}"#,
    r#"{"__REALTIME_TIMESTAMP":"1704535200000000","_HOSTNAME":"web-1","_PID":"77","_COMM":"sshd","MESSAGE":"Connection closed by 172.16.0.9 port 40000 [preauth]"}"#,
    r#"{"__REALTIME_TIMESTAMP":"1704448900000000","_HOSTNAME":"bastion","_PID":"1","_COMM":"systemd","MESSAGE":"Started Session 4 of user deploy."}"#,
    r#"{"__REALTIME_TIMESTAMP":"1704448900000000","_HOSTNAME":"bastion","MESSAGE":[255,254,0]}"#,
    "-- No entries --",
];
