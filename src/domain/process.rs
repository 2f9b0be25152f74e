use std::fmt;

/// Operating-system process identifier discovered through a port listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessId(u32);

impl ProcessId {
    pub fn new(pid: u32) -> Self {
        Self(pid)
    }
}

impl fmt::Display for ProcessId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Find the process owning `port` in the output of a port listing command.
///
/// The first line mentioning `:<port>` whose trailing token is a pid wins.
/// Trailing tokens look like `1234` (Windows `netstat -ano`) or `1234/node`
/// (`netstat -tlnp`).
pub fn find_port_owner(listing: &str, port: u16) -> Option<ProcessId> {
    let needle = format!(":{port}");
    listing
        .lines()
        .filter(|line| mentions_port(line, &needle))
        .find_map(|line| line.split_whitespace().last().and_then(parse_pid_token))
}

fn mentions_port(line: &str, needle: &str) -> bool {
    line.match_indices(needle).any(|(index, _)| {
        !line[index + needle.len()..].starts_with(|c: char| c.is_ascii_digit())
    })
}

fn parse_pid_token(token: &str) -> Option<ProcessId> {
    let digits = token.split('/').next()?;
    digits.parse::<u32>().ok().filter(|pid| *pid != 0).map(ProcessId)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const WINDOWS_LISTING: &str = "
Active Connections

  Proto  Local Address          Foreign Address        State           PID
  TCP    0.0.0.0:135            0.0.0.0:0              LISTENING       1012
  TCP    127.0.0.1:5173         0.0.0.0:0              LISTENING       8842
  TCP    [::1]:51730            [::]:0                 LISTENING       4410
";

    const LINUX_LISTING: &str = "
Active Internet connections (only servers)
Proto Recv-Q Send-Q Local Address           Foreign Address         State       PID/Program name
tcp        0      0 127.0.0.53:53           0.0.0.0:*               LISTEN      -
tcp6       0      0 ::1:5173                :::*                    LISTEN      23117/node
";

    #[test]
    fn finds_pid_in_windows_netstat_output() {
        assert_eq!(find_port_owner(WINDOWS_LISTING, 5173), Some(ProcessId::new(8842)));
    }

    #[test]
    fn finds_pid_in_linux_netstat_output() {
        assert_eq!(find_port_owner(LINUX_LISTING, 5173), Some(ProcessId::new(23117)));
    }

    #[test]
    fn longer_port_with_same_prefix_is_not_a_match() {
        let listing = "  TCP    [::1]:51730   [::]:0   LISTENING   4410";
        assert_eq!(find_port_owner(listing, 5173), None);
    }

    #[test]
    fn lines_without_pid_are_skipped() {
        let listing = "tcp 0 0 0.0.0.0:5173 0.0.0.0:* LISTEN -";
        assert_eq!(find_port_owner(listing, 5173), None);
        assert_eq!(find_port_owner("", 5173), None);
    }

    proptest! {
        #[test]
        fn trailing_pid_is_extracted_for_any_port(port in 1u16.., pid in 1u32..) {
            let listing = format!("  TCP    127.0.0.1:{port}   0.0.0.0:0   LISTENING   {pid}\n");
            prop_assert_eq!(find_port_owner(&listing, port), Some(ProcessId::new(pid)));
        }
    }
}
