#![no_main]

use libfuzzer_sys::fuzz_target;
use sflow_core::decode;
use std::net::{IpAddr, Ipv4Addr};

fuzz_target!(|data: &[u8]| {
    let loopback = IpAddr::V4(Ipv4Addr::LOCALHOST);
    let _ = decode(data, 0, loopback, loopback);
});
