use std::net::IpAddr;

use axum::http::HeaderMap;
use ipnet::IpNet;

/// Who sent a submission. Only used for log lines.
#[derive(Debug, Clone)]
pub struct ClientMeta {
    pub ip: IpAddr,
    pub user_agent: String,
}

/// Extract client metadata from request headers.
pub fn extract(headers: &HeaderMap, peer_addr: IpAddr, trusted_proxies: &[IpNet]) -> ClientMeta {
    let ip = extract_ip(headers, peer_addr, trusted_proxies);
    let user_agent = headers
        .get("user-agent")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();

    ClientMeta { ip, user_agent }
}

fn extract_ip(headers: &HeaderMap, peer: IpAddr, trusted_proxies: &[IpNet]) -> IpAddr {
    // Only trust X-Forwarded-For if the direct connection is from a trusted proxy
    if trusted_proxies.iter().any(|net| net.contains(&peer)) {
        if let Some(xff) = headers.get("x-forwarded-for").and_then(|v| v.to_str().ok()) {
            // Take the first (leftmost) IP that isn't a trusted proxy
            for ip_str in xff.split(',').map(|s| s.trim()) {
                if let Ok(ip) = ip_str.parse::<IpAddr>() {
                    if !trusted_proxies.iter().any(|net| net.contains(&ip)) {
                        return ip;
                    }
                }
            }
        }
    }

    peer
}
