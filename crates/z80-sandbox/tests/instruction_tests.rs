//! Program-level tests for individual Z80 instructions.
//!
//! Each test loads a short program, runs it to HALT and checks the
//! registers and memory it should have touched.

use emu_core::Cpu;
use z80_sandbox::{Error, Fault, StepLimit, StepResult, Z80};
use z80_sandbox::opcodes::Prefix;

/// Load `program` at `origin`, point PC at it and run until HALT.
fn run_program(origin: u16, program: &[u8]) -> Z80 {
    let mut cpu = Z80::new();
    cpu.load(origin, program).unwrap();
    cpu.set_pc(origin);
    run_until_halt(&mut cpu);
    cpu
}

/// Run CPU until it HALTs, return instruction count.
fn run_until_halt(cpu: &mut Z80) -> u64 {
    let outcome = cpu.run(StepLimit(10_000));
    assert_eq!(outcome.result, StepResult::Halted, "program should end in HALT");
    outcome.steps
}

#[test]
fn test_nop() {
    let mut cpu = run_program(0x0000, &[0x00, 0x76]); // NOP, HALT
    assert_eq!(cpu.pc(), 0x0002); // After HALT
    assert!(cpu.is_halted());

    // Halted is terminal
    assert_eq!(cpu.step(), StepResult::Halted);
    assert_eq!(cpu.pc(), 0x0002);
}

#[test]
fn test_lone_halt() {
    let mut cpu = Z80::new();
    cpu.load(0x0000, &[0x76]).unwrap();

    assert_eq!(cpu.step(), StepResult::Halted);
    let pc = cpu.pc();
    for _ in 0..3 {
        assert_eq!(cpu.step(), StepResult::Halted);
    }
    assert_eq!(cpu.pc(), pc, "steps after HALT should not move PC");
    assert_eq!(cpu.regs().r, 1);
}

#[test]
fn test_ld_a_n() {
    let cpu = run_program(0x0000, &[0x3E, 0x42, 0x76]); // LD A, 0x42; HALT
    assert_eq!(cpu.regs().a, 0x42);
}

#[test]
fn test_ld_bc_nn() {
    let cpu = run_program(0x0000, &[0x01, 0x34, 0x12, 0x76]); // LD BC, 0x1234; HALT
    assert_eq!(cpu.regs().bc(), 0x1234);
    assert_eq!(cpu.regs().b, 0x12);
    assert_eq!(cpu.regs().c, 0x34);
}

#[test]
fn test_ld_register_to_register() {
    let cpu = run_program(0x0000, &[
        0x06, 0x99, // LD B, 0x99
        0x48,       // LD C, B
        0x79,       // LD A, C
        0x76,       // HALT
    ]);
    assert_eq!(cpu.regs().c, 0x99);
    assert_eq!(cpu.regs().a, 0x99);
}

#[test]
fn test_indirect_loads() {
    let mut cpu = Z80::new();
    cpu.load(0x0000, &[
        0x01, 0x00, 0x40, // LD BC, 0x4000
        0x0A,             // LD A, (BC)
        0x11, 0x00, 0x50, // LD DE, 0x5000
        0x12,             // LD (DE), A
        0x21, 0x00, 0x60, // LD HL, 0x6000
        0x34,             // INC (HL)
        0x32, 0x00, 0x70, // LD (0x7000), A
        0x76,             // HALT
    ])
    .unwrap();
    cpu.memory_mut().write(0x4000, 0x5A);
    cpu.memory_mut().write(0x6000, 0xFF);
    run_until_halt(&mut cpu);

    assert_eq!(cpu.regs().a, 0x5A);
    assert_eq!(cpu.memory().read(0x5000), 0x5A);
    assert_eq!(cpu.memory().read(0x6000), 0x00);
    assert!(cpu.regs().f.zero, "INC (HL) wrapping to 0 should set Z");
    assert_eq!(cpu.memory().read(0x7000), 0x5A);
}

#[test]
fn test_store_and_load_hl() {
    let cpu = run_program(0x0000, &[
        0x21, 0x34, 0x12, // LD HL, 0x1234
        0x22, 0x00, 0x80, // LD (0x8000), HL
        0x21, 0x00, 0x00, // LD HL, 0
        0x2A, 0x00, 0x80, // LD HL, (0x8000)
        0x76,             // HALT
    ]);
    assert_eq!(cpu.regs().hl(), 0x1234);
    assert_eq!(cpu.memory().read(0x8000), 0x34);
    assert_eq!(cpu.memory().read(0x8001), 0x12);
}

#[test]
fn test_push_pop_bc() {
    let cpu = run_program(0x0000, &[
        0x01, 0x34, 0x12, // LD BC, 0x1234
        0x31, 0x00, 0x80, // LD SP, 0x8000
        0xC5,             // PUSH BC
        0x01, 0x00, 0x00, // LD BC, 0x0000
        0xC1,             // POP BC
        0x76,             // HALT
    ]);
    assert_eq!(cpu.regs().bc(), 0x1234);
    assert_eq!(cpu.sp(), 0x8000, "SP should be restored");
    // High byte at SP-1, low byte at SP-2
    assert_eq!(cpu.memory().read(0x7FFF), 0x12);
    assert_eq!(cpu.memory().read(0x7FFE), 0x34);
}

#[test]
fn test_push_pop_af_packs_flags() {
    let cpu = run_program(0x0000, &[
        0x31, 0x00, 0x80, // LD SP, 0x8000
        0x3E, 0x80,       // LD A, 0x80
        0xB7,             // OR A: S set, P/V clear (one bit set)
        0x37,             // SCF
        0xF5,             // PUSH AF
        0xC1,             // POP BC
        0x76,             // HALT
    ]);
    assert_eq!(cpu.regs().b, 0x80);
    // S and C
    assert_eq!(cpu.regs().c, 0x81);
    assert_eq!(cpu.sp(), 0x8000);
}

#[test]
fn test_pop_af_unpacks_flags() {
    let mut cpu = Z80::new();
    cpu.load(0x0000, &[0x31, 0xFE, 0x7F, 0xF1, 0x76]).unwrap(); // LD SP, 0x7FFE; POP AF; HALT
    cpu.memory_mut().write16(0x7FFE, 0x1245);
    run_until_halt(&mut cpu);

    assert_eq!(cpu.regs().a, 0x12);
    let f = cpu.regs().f;
    assert!(f.zero && f.parity_overflow && f.carry);
    assert!(!f.sign && !f.half_carry && !f.subtract);
    assert_eq!(cpu.sp(), 0x8000);
}

#[test]
fn test_call_ret() {
    let mut cpu = Z80::new();
    cpu.load(0x0100, &[0xCD, 0x00, 0x03, 0x76]).unwrap(); // CALL 0x0300; HALT
    cpu.load(0x0300, &[0xC9]).unwrap(); // RET
    cpu.set_pc(0x0100);
    cpu.set_sp(0x8000);

    assert_eq!(cpu.step(), StepResult::Running);
    assert_eq!(cpu.pc(), 0x0300);
    assert_eq!(cpu.sp(), 0x7FFE);
    assert_eq!(cpu.memory().read(0x7FFF), 0x01, "return address high byte");
    assert_eq!(cpu.memory().read(0x7FFE), 0x03, "return address low byte");

    assert_eq!(cpu.step(), StepResult::Running);
    assert_eq!(cpu.pc(), 0x0103);
    assert_eq!(cpu.sp(), 0x8000, "SP should be restored");

    assert_eq!(cpu.step(), StepResult::Halted);
}

#[test]
fn test_conditional_call_and_ret() {
    let cpu = run_program(0x0000, &[
        0x31, 0x00, 0x80, // LD SP, 0x8000
        0xAF,             // XOR A: Z set
        0xC4, 0x20, 0x00, // CALL NZ, 0x0020 (not taken)
        0xCC, 0x20, 0x00, // CALL Z, 0x0020 (taken)
        0x76,             // HALT at 0x000A
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00,
        0x06, 0x07,       // 0x0020: LD B, 7
        0xC0,             // RET NZ (not taken)
        0xC8,             // RET Z (taken)
    ]);
    assert_eq!(cpu.regs().b, 7);
    assert_eq!(cpu.pc(), 0x000B);
    assert_eq!(cpu.sp(), 0x8000);
}

#[test]
fn test_jp_nz() {
    // Z set: not taken, advances by its own length
    let mut cpu = Z80::new();
    cpu.load(0x0000, &[0xAF, 0xC2, 0x00, 0x10]).unwrap(); // XOR A; JP NZ, 0x1000
    cpu.step();
    assert!(cpu.regs().f.zero);
    cpu.step();
    assert_eq!(cpu.pc(), 0x0004);

    // Z clear: taken
    let mut cpu = Z80::new();
    cpu.load(0x0000, &[0x3E, 0x01, 0xB7, 0xC2, 0x00, 0x10]).unwrap(); // LD A, 1; OR A; JP NZ, 0x1000
    cpu.step();
    cpu.step();
    assert!(!cpu.regs().f.zero);
    cpu.step();
    assert_eq!(cpu.pc(), 0x1000);
}

#[test]
fn test_jp_hl() {
    let mut cpu = Z80::new();
    cpu.load(0x0000, &[0x21, 0x00, 0x20, 0xE9]).unwrap(); // LD HL, 0x2000; JP (HL)
    cpu.load(0x2000, &[0x76]).unwrap();
    run_until_halt(&mut cpu);
    assert_eq!(cpu.pc(), 0x2001);
}

#[test]
fn test_parity_jumps() {
    // XOR A leaves A=0: even parity, P/V set
    let mut cpu = Z80::new();
    cpu.load(0x0000, &[
        0xAF,             // XOR A
        0xE2, 0x00, 0x20, // JP PO, 0x2000 (not taken)
        0xEA, 0x00, 0x30, // JP PE, 0x3000 (taken)
    ])
    .unwrap();
    cpu.load(0x2000, &[0x76]).unwrap();
    cpu.load(0x3000, &[0x76]).unwrap();
    run_until_halt(&mut cpu);
    assert_eq!(cpu.pc(), 0x3001);

    // A=1: odd parity, P/V clear
    let mut cpu = Z80::new();
    cpu.load(0x0000, &[
        0x3E, 0x01,       // LD A, 1
        0xB7,             // OR A
        0xEA, 0x00, 0x30, // JP PE, 0x3000 (not taken)
        0xE2, 0x00, 0x20, // JP PO, 0x2000 (taken)
    ])
    .unwrap();
    cpu.load(0x2000, &[0x76]).unwrap();
    cpu.load(0x3000, &[0x76]).unwrap();
    run_until_halt(&mut cpu);
    assert_eq!(cpu.pc(), 0x2001);
}

#[test]
fn test_sign_jumps() {
    let mut cpu = Z80::new();
    cpu.load(0x0000, &[
        0x3E, 0x80,       // LD A, 0x80
        0xB7,             // OR A: S set
        0xF2, 0x00, 0x20, // JP P, 0x2000 (not taken)
        0xFA, 0x00, 0x30, // JP M, 0x3000 (taken)
    ])
    .unwrap();
    cpu.load(0x2000, &[0x76]).unwrap();
    cpu.load(0x3000, &[0x76]).unwrap();
    run_until_halt(&mut cpu);
    assert_eq!(cpu.pc(), 0x3001);
}

#[test]
fn test_jr() {
    let cpu = run_program(0x0000, &[
        0x18, 0x02, // JR +2
        0x3E, 0x11, // LD A, 0x11 (skipped)
        0x76,       // HALT
    ]);
    assert_eq!(cpu.regs().a, 0x00);
    assert_eq!(cpu.pc(), 0x0005);
}

#[test]
fn test_jr_conditional() {
    let cpu = run_program(0x0000, &[
        0x37,       // SCF
        0x30, 0x02, // JR NC, +2 (not taken)
        0x38, 0x02, // JR C, +2 (taken)
        0x3E, 0x11, // LD A, 0x11 (skipped)
        0x76,       // HALT
    ]);
    assert_eq!(cpu.regs().a, 0x00);
}

#[test]
fn test_djnz_loop() {
    let mut cpu = Z80::new();
    cpu.load(0x0000, &[
        0x06, 0x05, // LD B, 5
        0x3E, 0x00, // LD A, 0
        0x3C,       // loop: INC A
        0x10, 0xFD, // DJNZ loop
        0x76,       // HALT
    ])
    .unwrap();
    let steps = run_until_halt(&mut cpu);

    assert_eq!(cpu.regs().a, 5);
    assert_eq!(cpu.regs().b, 0);
    // 2 loads + 5 * (INC + DJNZ) + HALT
    assert_eq!(steps, 13);
}

#[test]
fn test_rst() {
    let mut cpu = Z80::new();
    cpu.load(0x0100, &[0xFF]).unwrap(); // RST 38h
    cpu.load(0x0038, &[0x76]).unwrap();
    cpu.set_pc(0x0100);
    cpu.set_sp(0x8000);
    run_until_halt(&mut cpu);

    assert_eq!(cpu.pc(), 0x0039);
    assert_eq!(cpu.sp(), 0x7FFE);
    assert_eq!(cpu.memory().read16(0x7FFE), 0x0101);
}

#[test]
fn test_ex_de_hl() {
    let cpu = run_program(0x0000, &[
        0x11, 0x22, 0x11, // LD DE, 0x1122
        0x21, 0x44, 0x33, // LD HL, 0x3344
        0xEB,             // EX DE, HL
        0x76,             // HALT
    ]);
    assert_eq!(cpu.regs().de(), 0x3344);
    assert_eq!(cpu.regs().hl(), 0x1122);
}

#[test]
fn test_ex_sp_hl() {
    let mut cpu = Z80::new();
    cpu.load(0x0000, &[
        0x31, 0x00, 0x80, // LD SP, 0x8000
        0x21, 0x34, 0x12, // LD HL, 0x1234
        0xE3,             // EX (SP), HL
        0x76,             // HALT
    ])
    .unwrap();
    cpu.memory_mut().write16(0x8000, 0xBEEF);
    run_until_halt(&mut cpu);

    assert_eq!(cpu.regs().hl(), 0xBEEF);
    assert_eq!(cpu.memory().read16(0x8000), 0x1234);
    assert_eq!(cpu.sp(), 0x8000, "SP should not move");
}

#[test]
fn test_exx() {
    let cpu = run_program(0x0000, &[
        0x01, 0x11, 0x11, // LD BC, 0x1111
        0x11, 0x22, 0x22, // LD DE, 0x2222
        0x21, 0x33, 0x33, // LD HL, 0x3333
        0xD9,             // EXX
        0x01, 0xAA, 0xAA, // LD BC, 0xAAAA
        0x76,             // HALT
    ]);
    assert_eq!(cpu.regs().bc(), 0xAAAA);
    assert_eq!(cpu.regs().de(), 0x0000);
    assert_eq!(cpu.regs().bc_alt(), 0x1111);
    assert_eq!(cpu.regs().de_alt(), 0x2222);
    assert_eq!(cpu.regs().hl_alt(), 0x3333);
}

#[test]
fn test_ex_af() {
    let cpu = run_program(0x0000, &[
        0x3E, 0x42, // LD A, 0x42
        0x37,       // SCF
        0x08,       // EX AF, AF'
        0x3E, 0x00, // LD A, 0
        0x76,       // HALT
    ]);
    assert_eq!(cpu.regs().a, 0x00);
    assert!(!cpu.regs().f.carry);
    assert_eq!(cpu.regs().a_alt, 0x42);
    assert!(cpu.regs().f_alt.carry);
}

#[test]
fn test_add_a_n() {
    let cpu = run_program(0x0000, &[0x3E, 0x0F, 0xC6, 0x01, 0x76]); // LD A, 0x0F; ADD A, 1
    assert_eq!(cpu.regs().a, 0x10);
    assert!(cpu.regs().f.half_carry);
    assert!(!cpu.regs().f.carry);
    assert!(!cpu.regs().f.zero);
}

#[test]
fn test_sub_and_cp() {
    let cpu = run_program(0x0000, &[
        0x3E, 0x10, // LD A, 0x10
        0x06, 0x01, // LD B, 1
        0x90,       // SUB B
        0xFE, 0x0F, // CP 0x0F
        0x76,       // HALT
    ]);
    assert_eq!(cpu.regs().a, 0x0F, "CP should not modify A");
    assert!(cpu.regs().f.zero);
    assert!(cpu.regs().f.subtract);
}

#[test]
fn test_add_hl_rr() {
    let cpu = run_program(0x0000, &[
        0x21, 0x00, 0x0F, // LD HL, 0x0F00
        0x01, 0x00, 0x01, // LD BC, 0x0100
        0xAF,             // XOR A: Z and P/V set
        0x09,             // ADD HL, BC
        0x76,             // HALT
    ]);
    let f = cpu.regs().f;
    assert_eq!(cpu.regs().hl(), 0x1000);
    assert!(f.half_carry, "carry out of bit 11");
    assert!(!f.carry);
    assert!(f.zero && f.parity_overflow, "S/Z/PV should be preserved");
}

#[test]
fn test_inc_dec_16_leave_flags() {
    let cpu = run_program(0x0000, &[
        0x01, 0xFF, 0xFF, // LD BC, 0xFFFF
        0xAF,             // XOR A
        0x03,             // INC BC
        0x1B,             // DEC DE
        0x76,             // HALT
    ]);
    assert_eq!(cpu.regs().bc(), 0x0000);
    assert_eq!(cpu.regs().de(), 0xFFFF);
    assert!(cpu.regs().f.zero, "flags come from XOR A only");
}

#[test]
fn test_daa_after_add() {
    let cpu = run_program(0x0000, &[
        0x3E, 0x15, // LD A, 0x15
        0xC6, 0x27, // ADD A, 0x27
        0x27,       // DAA
        0x76,       // HALT
    ]);
    assert_eq!(cpu.regs().a, 0x42);
    assert!(!cpu.regs().f.carry);
}

#[test]
fn test_rotates() {
    let cpu = run_program(0x0000, &[0x3E, 0x81, 0x07, 0x76]); // LD A, 0x81; RLCA
    assert_eq!(cpu.regs().a, 0x03);
    assert!(cpu.regs().f.carry);

    let cpu = run_program(0x0000, &[0x3E, 0x01, 0x1F, 0x76]); // LD A, 1; RRA
    assert_eq!(cpu.regs().a, 0x00);
    assert!(cpu.regs().f.carry);
}

#[test]
fn test_cpl_scf_ccf() {
    let cpu = run_program(0x0000, &[0x3E, 0x0F, 0x2F, 0x37, 0x3F, 0x76]); // LD A, 0x0F; CPL; SCF; CCF
    assert_eq!(cpu.regs().a, 0xF0);
    assert!(!cpu.regs().f.carry);
    assert!(cpu.regs().f.half_carry, "CCF copies old carry into H");
}

#[test]
fn test_di_ei() {
    let mut cpu = Z80::new();
    cpu.load(0x0000, &[0xFB, 0xF3, 0x76]).unwrap(); // EI; DI; HALT
    cpu.step();
    assert!(cpu.regs().iff1 && cpu.regs().iff2);
    cpu.step();
    assert!(!cpu.regs().iff1 && !cpu.regs().iff2);
}

#[test]
fn test_in_reads_floating_bus() {
    let cpu = run_program(0x0000, &[
        0x3E, 0x12, // LD A, 0x12
        0xD3, 0xFE, // OUT (0xFE), A
        0xDB, 0xFE, // IN A, (0xFE)
        0x76,       // HALT
    ]);
    assert_eq!(cpu.regs().a, 0xFF);
    assert_eq!(cpu.pc(), 0x0007);
}

#[test]
fn test_prefix_faults() {
    for prefix in [0xCB, 0xDD, 0xED, 0xFD] {
        let mut cpu = Z80::new();
        cpu.load(0x0000, &[0x00, prefix, 0x00]).unwrap();
        let outcome = cpu.run(StepLimit::default());

        let StepResult::Faulted(fault) = outcome.result else {
            panic!("{prefix:#04X} should fault, got {:?}", outcome.result);
        };
        assert_eq!(fault.pc, 0x0001);
        assert_eq!(fault.opcode, prefix);
        assert!(fault.prefix.is_some());
        assert_eq!(outcome.steps, 1, "the faulting byte does not count as a step");
        assert_eq!(cpu.pc(), 0x0001, "PC stays on the prefix byte");
        assert_eq!(cpu.regs().r, 1, "no refresh for the faulting fetch");
    }
}

#[test]
fn test_fault_converts_to_error() {
    let mut cpu = Z80::new();
    cpu.load(0x0000, &[0xED]).unwrap();
    let result = cpu.step();
    assert_eq!(
        result,
        StepResult::Faulted(Fault { pc: 0, opcode: 0xED, prefix: Some(Prefix::Ed) })
    );
    assert_eq!(result.into_result(), Err(Error::UnsupportedOpcode { pc: 0, opcode: 0xED }));
}

#[test]
fn test_reset_via_cpu_trait() {
    let mut cpu = run_program(0x0000, &[0x3E, 0x42, 0x76]);
    Cpu::reset(&mut cpu);
    assert!(!cpu.is_halted());
    assert_eq!(Cpu::pc(&cpu), 0);
    assert_eq!(cpu.regs().a, 0);
    assert_eq!(cpu.state(), StepResult::Running);
}

#[test]
fn test_load_rejects_overflow() {
    let mut cpu = Z80::new();
    assert_eq!(
        cpu.load(0xFFFF, &[0x00, 0x00]),
        Err(Error::InvalidLoadOffset { address: 0xFFFF, len: 2 })
    );
}

#[test]
fn test_fetch_wraps_at_top_of_memory() {
    let mut cpu = Z80::new();
    cpu.load(0xFFFF, &[0x3E]).unwrap(); // LD A, n with n at 0x0000
    cpu.load(0x0000, &[0x77]).unwrap();
    cpu.set_pc(0xFFFF);
    assert_eq!(cpu.step(), StepResult::Running);
    assert_eq!(cpu.regs().a, 0x77);
    assert_eq!(cpu.pc(), 0x0001);
}
