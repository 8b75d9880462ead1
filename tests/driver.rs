mod common;

use common::{ChipHandle, CountingIdle};
use embedded_hal_mock::eh1::delay::NoopDelay;
use sx127x::op::{IrqFlags, Mode};
use sx127x::reg::Register;
use sx127x::{Config, Error, Sx127x, VersionPolicy};

fn radio_on(
    handle: &ChipHandle,
) -> Sx127x<common::SimBus, common::ResetPin, common::Dio0Pin> {
    let (bus, nrst, dio0) = handle.parts();
    Sx127x::new(bus, nrst, dio0)
}

#[test]
fn init_resets_once_and_leaves_the_chip_in_standby() {
    let handle = ChipHandle::new();
    let mut radio = radio_on(&handle);

    let version = radio.init(&mut NoopDelay::new(), &Config::default()).unwrap();

    assert_eq!(version, 0x12);
    let chip = handle.chip();
    assert_eq!(chip.resets, 1);
    assert_eq!(chip.mode_bits(), Mode::Standby.bits());
    assert_eq!(chip.regs[Register::SyncWord.addr() as usize], 0x12);
    drop(chip);
    assert_eq!(radio.mode(), Mode::Standby);
}

#[test]
fn init_sleeps_before_setting_the_lora_bit() {
    let handle = ChipHandle::new();
    let mut radio = radio_on(&handle);
    radio.init(&mut NoopDelay::new(), &Config::default()).unwrap();

    let mode_writes = handle.chip().writes_to(Register::OpMode.addr());
    assert_eq!(mode_writes[0] & 0x80, 0, "first mode write keeps FSK");
    assert_eq!(mode_writes[0] & 0x07, Mode::Sleep.bits());
    assert_eq!(mode_writes[1], 0b1000_1000, "LoRa bit set while asleep");
    assert_eq!(
        *mode_writes.last().unwrap() & 0x07,
        Mode::Standby.bits(),
        "sequence ends in standby"
    );
}

#[test]
fn version_mismatch_is_fatal_under_enforce() {
    let handle = ChipHandle::with_version(0x00);
    let mut radio = radio_on(&handle);

    let err = radio.init(&mut NoopDelay::new(), &Config::default()).unwrap_err();
    assert_eq!(err, Error::Version { read: 0x00 });
}

#[test]
fn version_mismatch_passes_under_ignore() {
    let handle = ChipHandle::with_version(0x00);
    let mut radio = radio_on(&handle);
    let conf = Config::default().set_version_policy(VersionPolicy::Ignore);

    assert_eq!(radio.init(&mut NoopDelay::new(), &conf).unwrap(), 0x00);
    assert_eq!(handle.chip().mode_bits(), Mode::Standby.bits());
}

#[test]
fn start_receive_arms_continuous_mode() {
    let handle = ChipHandle::new();
    let mut radio = radio_on(&handle);
    radio.init(&mut NoopDelay::new(), &Config::default()).unwrap();

    radio.start_receive().unwrap();

    let chip = handle.chip();
    assert_eq!(chip.mode_bits(), Mode::ReceiveContinuous.bits());
    assert_eq!(chip.regs[Register::DioMapping1.addr() as usize], 0x00);
}

#[test]
fn active_mode_switches_are_rejected() {
    let handle = ChipHandle::new();
    let mut radio = radio_on(&handle);
    radio.init(&mut NoopDelay::new(), &Config::default()).unwrap();
    radio.start_receive().unwrap();

    let err = radio.set_mode(Mode::Transmit).unwrap_err();
    assert_eq!(
        err,
        Error::Transition {
            from: Mode::ReceiveContinuous,
            to: Mode::Transmit,
        }
    );
    // the chip never saw the rejected write
    assert_eq!(handle.chip().mode_bits(), Mode::ReceiveContinuous.bits());
}

#[test]
fn transmit_loads_the_fifo_and_enters_tx() {
    let handle = ChipHandle::new();
    let mut radio = radio_on(&handle);
    radio.init(&mut NoopDelay::new(), &Config::default()).unwrap();

    radio.transmit(b"L").unwrap();

    let chip = handle.chip();
    assert_eq!(chip.mode_bits(), Mode::Transmit.bits());
    assert_eq!(chip.fifo[0], b'L');
    assert_eq!(chip.regs[Register::PayloadLength.addr() as usize], 1);
    assert_eq!(chip.regs[Register::DioMapping1.addr() as usize], 0x40);
}

#[test]
fn wait_transmit_done_completes_when_pin_and_flag_agree() {
    let handle = ChipHandle::new();
    let mut radio = radio_on(&handle);
    radio.init(&mut NoopDelay::new(), &Config::default()).unwrap();
    radio.transmit(b"L").unwrap();
    handle.chip().inject_tx_done();

    let mut idle = CountingIdle::default();
    radio.wait_transmit_done(&mut idle, 8).unwrap();
    assert_eq!(idle.count, 0, "no sleep needed, completion already latched");
}

#[test]
fn wait_transmit_done_ignores_a_flag_without_the_pin() {
    let handle = ChipHandle::new();
    let mut radio = radio_on(&handle);
    radio.init(&mut NoopDelay::new(), &Config::default()).unwrap();
    radio.transmit(b"L").unwrap();

    // TxDone latched, but DIO0 remapped elsewhere: the pin stays low and
    // the cross-check must not trust the flag alone
    handle.chip().inject_tx_done();
    handle.chip().regs[Register::DioMapping1.addr() as usize] = 0x80;

    let mut idle = CountingIdle::default();
    let err = radio.wait_transmit_done(&mut idle, 4).unwrap_err();
    assert_eq!(err, Error::Timeout);
    assert_eq!(idle.count, 4, "slept the whole wake budget");
}

#[test]
fn an_unwired_completion_line_times_out() {
    let handle = ChipHandle::new();
    let (bus, nrst, _dio0) = handle.parts();
    let mut radio = Sx127x::new(bus, nrst, sx127x::gpio::DisconnectedPin);
    radio.init(&mut NoopDelay::new(), &Config::default()).unwrap();
    radio.transmit(b"L").unwrap();
    handle.chip().inject_tx_done();

    let mut idle = CountingIdle::default();
    assert_eq!(
        radio.wait_transmit_done(&mut idle, 3).unwrap_err(),
        Error::Timeout
    );
}

#[test]
fn read_packet_points_bursts_and_clears() {
    let handle = ChipHandle::new();
    let mut radio = radio_on(&handle);
    radio.init(&mut NoopDelay::new(), &Config::default()).unwrap();
    radio.start_receive().unwrap();

    handle.chip().inject_rx_packet(0x20, b"abc");
    handle.chip().writes.clear();

    let mut buf = [0u8; 255];
    let len = radio.read_packet(&mut buf).unwrap();

    assert_eq!(&buf[..len], b"abc");
    let chip = handle.chip();
    assert_eq!(
        chip.writes,
        vec![
            (Register::FifoAddrPtr.addr(), 0x20),
            (Register::IrqFlags.addr(), 0xFF),
        ],
        "exactly one pointer set, then the clear-all acknowledge"
    );
    assert_eq!(chip.fifo_reads, vec![(0x20, 3)], "one burst of exactly N bytes");
    assert_eq!(chip.irq_flags(), 0, "write-1-to-clear wiped every flag");
}

#[test]
fn irq_flags_round_trip_through_the_chip() {
    let handle = ChipHandle::new();
    let mut radio = radio_on(&handle);
    radio.init(&mut NoopDelay::new(), &Config::default()).unwrap();

    handle.chip().inject_tx_done();
    assert_eq!(radio.irq_flags().unwrap(), IrqFlags::TX_DONE);

    radio.clear_irq().unwrap();
    assert_eq!(radio.irq_flags().unwrap(), IrqFlags::empty());
}

#[test]
fn packet_status_reads_the_signal_registers() {
    let handle = ChipHandle::new();
    let mut radio = radio_on(&handle);
    radio.init(&mut NoopDelay::new(), &Config::default()).unwrap();

    handle.chip().regs[Register::PktSnrValue.addr() as usize] = 0xFA;
    handle.chip().regs[Register::PktRssiValue.addr() as usize] = 94;

    let status = radio.packet_status().unwrap();
    assert_eq!(status.snr_db(), -1.5);
    assert_eq!(status.rssi_dbm(true), -70);
}

#[test]
fn dump_settings_emits_one_line_per_register() {
    let handle = ChipHandle::new();
    let mut radio = radio_on(&handle);
    radio.init(&mut NoopDelay::new(), &Config::default()).unwrap();

    let mut out = String::new();
    radio.dump_settings(&mut out).unwrap();

    assert_eq!(out.lines().count(), 9);
    assert!(out.contains("0x06: 0x6C = 0110 1100\r\n"));
}
