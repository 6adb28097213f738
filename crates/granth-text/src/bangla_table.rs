#![forbid(unsafe_code)]

//! Bangla ligature table: replacement codes 0xE201..=0xE50F.
//!
//! Row groups, in code order: the nukta letters, the reph forms of
//! `ra + virama`, hasanta (consonant + virama) forms, the full word-final
//! `ra + virama` forms, the ya-postforms, the ra-phala and ba-phala blocks,
//! curated two-consonant conjuncts, longer clusters, and the
//! `i + ssa + virama + tta` cluster. The full `ra + virama` rows repeat the
//! reph rows' components on purpose; the substitution pass picks between the
//! two codes by position in the word.

use crate::ligature::LigatureDef;

const fn def(code: u16, components: &'static [(u16, &'static str)]) -> LigatureDef {
    LigatureDef { code, components }
}

pub(crate) static DEFS: &[LigatureDef] = &[
    def(0xE204, &[(0x09A1, ""), (0x09BC, "nukt")]),
    def(0xE205, &[(0x09A2, ""), (0x09BC, "nukt")]),
    def(0xE206, &[(0x09AF, ""), (0x09BC, "nukt")]),
    def(0xE225, &[(0x09F0, ""), (0x09CD, "rphf")]),
    def(0xE226, &[(0x09B0, ""), (0x09CD, "rphf")]),
    def(0xE227, &[(0x0995, ""), (0x09CD, "half")]),
    def(0xE228, &[(0x0996, ""), (0x09CD, "half")]),
    def(0xE229, &[(0x0997, ""), (0x09CD, "half")]),
    def(0xE22A, &[(0x0998, ""), (0x09CD, "half")]),
    def(0xE22B, &[(0x0999, ""), (0x09CD, "half")]),
    def(0xE22C, &[(0x099A, ""), (0x09CD, "half")]),
    def(0xE22D, &[(0x099B, ""), (0x09CD, "half")]),
    def(0xE22E, &[(0x099C, ""), (0x09CD, "half")]),
    def(0xE22F, &[(0x099D, ""), (0x09CD, "half")]),
    def(0xE230, &[(0x099E, ""), (0x09CD, "half")]),
    def(0xE231, &[(0x099F, ""), (0x09CD, "half")]),
    def(0xE232, &[(0x09A0, ""), (0x09CD, "half")]),
    def(0xE233, &[(0x09A1, ""), (0x09CD, "half")]),
    def(0xE234, &[(0x09A2, ""), (0x09CD, "half")]),
    def(0xE235, &[(0x09A3, ""), (0x09CD, "half")]),
    def(0xE236, &[(0x09A4, ""), (0x09CD, "half")]),
    def(0xE237, &[(0x09A5, ""), (0x09CD, "half")]),
    def(0xE238, &[(0x09A6, ""), (0x09CD, "half")]),
    def(0xE239, &[(0x09A7, ""), (0x09CD, "half")]),
    def(0xE23A, &[(0x09A8, ""), (0x09CD, "half")]),
    def(0xE23B, &[(0x09AA, ""), (0x09CD, "half")]),
    def(0xE23C, &[(0x09AB, ""), (0x09CD, "half")]),
    def(0xE23D, &[(0x09AC, ""), (0x09CD, "half")]),
    def(0xE23E, &[(0x09AD, ""), (0x09CD, "half")]),
    def(0xE23F, &[(0x09AE, ""), (0x09CD, "half")]),
    def(0xE240, &[(0x09AF, ""), (0x09CD, "half")]),
    def(0xE241, &[(0x09B2, ""), (0x09CD, "half")]),
    def(0xE242, &[(0x09B6, ""), (0x09CD, "half")]),
    def(0xE243, &[(0x09B7, ""), (0x09CD, "half")]),
    def(0xE244, &[(0x09B8, ""), (0x09CD, "half")]),
    def(0xE245, &[(0x09B9, ""), (0x09CD, "half")]),
    def(0xE24C, &[(0x09F0, ""), (0x09CD, "blwf")]),
    def(0xE266, &[(0x09B0, ""), (0x09CD, "blwf")]),
    def(0xE271, &[(0x09CD, ""), (0x200D, ""), (0x09AF, "pstf")]),
    def(0xE272, &[(0x09CD, ""), (0x09AF, "pstf")]),
    def(0xE273, &[(0x09CD, ""), (0x09AF, ""), (0x09BE, "pstf")]),
    def(0xE280, &[(0x0995, ""), (0x09CD, ""), (0x09B0, "blwf.vatu")]),
    def(0xE281, &[(0x0996, ""), (0x09CD, ""), (0x09B0, "blwf.vatu")]),
    def(0xE282, &[(0x0997, ""), (0x09CD, ""), (0x09B0, "blwf.vatu")]),
    def(0xE283, &[(0x0998, ""), (0x09CD, ""), (0x09B0, "blwf.vatu")]),
    def(0xE284, &[(0x0999, ""), (0x09CD, ""), (0x09B0, "blwf.vatu")]),
    def(0xE285, &[(0x099A, ""), (0x09CD, ""), (0x09B0, "blwf.vatu")]),
    def(0xE286, &[(0x099B, ""), (0x09CD, ""), (0x09B0, "blwf.vatu")]),
    def(0xE287, &[(0x099C, ""), (0x09CD, ""), (0x09B0, "blwf.vatu")]),
    def(0xE288, &[(0x099D, ""), (0x09CD, ""), (0x09B0, "blwf.vatu")]),
    def(0xE289, &[(0x099E, ""), (0x09CD, ""), (0x09B0, "blwf.vatu")]),
    def(0xE28A, &[(0x099F, ""), (0x09CD, ""), (0x09B0, "blwf.vatu")]),
    def(0xE28B, &[(0x09A0, ""), (0x09CD, ""), (0x09B0, "blwf.vatu")]),
    def(0xE28C, &[(0x09A1, ""), (0x09CD, ""), (0x09B0, "blwf.vatu")]),
    def(0xE28D, &[(0x09A2, ""), (0x09CD, ""), (0x09B0, "blwf.vatu")]),
    def(0xE28E, &[(0x09A3, ""), (0x09CD, ""), (0x09B0, "blwf.vatu")]),
    def(0xE28F, &[(0x09A4, ""), (0x09CD, ""), (0x09B0, "blwf.vatu")]),
    def(0xE290, &[(0x09A5, ""), (0x09CD, ""), (0x09B0, "blwf.vatu")]),
    def(0xE291, &[(0x09A6, ""), (0x09CD, ""), (0x09B0, "blwf.vatu")]),
    def(0xE292, &[(0x09A7, ""), (0x09CD, ""), (0x09B0, "blwf.vatu")]),
    def(0xE293, &[(0x09A8, ""), (0x09CD, ""), (0x09B0, "blwf.vatu")]),
    def(0xE294, &[(0x09AA, ""), (0x09CD, ""), (0x09B0, "blwf.vatu")]),
    def(0xE295, &[(0x09AB, ""), (0x09CD, ""), (0x09B0, "blwf.vatu")]),
    def(0xE296, &[(0x09AC, ""), (0x09CD, ""), (0x09B0, "blwf.vatu")]),
    def(0xE297, &[(0x09AD, ""), (0x09CD, ""), (0x09B0, "blwf.vatu")]),
    def(0xE298, &[(0x09AE, ""), (0x09CD, ""), (0x09B0, "blwf.vatu")]),
    def(0xE299, &[(0x09AF, ""), (0x09CD, ""), (0x09B0, "blwf.vatu")]),
    def(0xE29A, &[(0x09B2, ""), (0x09CD, ""), (0x09B0, "blwf.vatu")]),
    def(0xE29B, &[(0x09B6, ""), (0x09CD, ""), (0x09B0, "blwf.vatu")]),
    def(0xE29C, &[(0x09B7, ""), (0x09CD, ""), (0x09B0, "blwf.vatu")]),
    def(0xE29D, &[(0x09B8, ""), (0x09CD, ""), (0x09B0, "blwf.vatu")]),
    def(0xE29E, &[(0x09B9, ""), (0x09CD, ""), (0x09B0, "blwf.vatu")]),
    def(0xE2A0, &[(0x0995, ""), (0x09CD, ""), (0x09AC, "blwf")]),
    def(0xE2A1, &[(0x0996, ""), (0x09CD, ""), (0x09AC, "blwf")]),
    def(0xE2A2, &[(0x0997, ""), (0x09CD, ""), (0x09AC, "blwf")]),
    def(0xE2A3, &[(0x0998, ""), (0x09CD, ""), (0x09AC, "blwf")]),
    def(0xE2A4, &[(0x0999, ""), (0x09CD, ""), (0x09AC, "blwf")]),
    def(0xE2A5, &[(0x099A, ""), (0x09CD, ""), (0x09AC, "blwf")]),
    def(0xE2A6, &[(0x099B, ""), (0x09CD, ""), (0x09AC, "blwf")]),
    def(0xE2A7, &[(0x099C, ""), (0x09CD, ""), (0x09AC, "blwf")]),
    def(0xE2A8, &[(0x099D, ""), (0x09CD, ""), (0x09AC, "blwf")]),
    def(0xE2A9, &[(0x099E, ""), (0x09CD, ""), (0x09AC, "blwf")]),
    def(0xE2AA, &[(0x099F, ""), (0x09CD, ""), (0x09AC, "blwf")]),
    def(0xE2AB, &[(0x09A0, ""), (0x09CD, ""), (0x09AC, "blwf")]),
    def(0xE2AC, &[(0x09A1, ""), (0x09CD, ""), (0x09AC, "blwf")]),
    def(0xE2AD, &[(0x09A2, ""), (0x09CD, ""), (0x09AC, "blwf")]),
    def(0xE2AE, &[(0x09A3, ""), (0x09CD, ""), (0x09AC, "blwf")]),
    def(0xE2AF, &[(0x09A4, ""), (0x09CD, ""), (0x09AC, "blwf")]),
    def(0xE2B0, &[(0x09A5, ""), (0x09CD, ""), (0x09AC, "blwf")]),
    def(0xE2B1, &[(0x09A6, ""), (0x09CD, ""), (0x09AC, "blwf")]),
    def(0xE2B2, &[(0x09A7, ""), (0x09CD, ""), (0x09AC, "blwf")]),
    def(0xE2B3, &[(0x09A8, ""), (0x09CD, ""), (0x09AC, "blwf")]),
    def(0xE2B4, &[(0x09AA, ""), (0x09CD, ""), (0x09AC, "blwf")]),
    def(0xE2B5, &[(0x09AB, ""), (0x09CD, ""), (0x09AC, "blwf")]),
    def(0xE2B6, &[(0x09AC, ""), (0x09CD, ""), (0x09AC, "blwf")]),
    def(0xE2B7, &[(0x09AD, ""), (0x09CD, ""), (0x09AC, "blwf")]),
    def(0xE2B8, &[(0x09AE, ""), (0x09CD, ""), (0x09AC, "blwf")]),
    def(0xE2B9, &[(0x09AF, ""), (0x09CD, ""), (0x09AC, "blwf")]),
    def(0xE2BA, &[(0x09B2, ""), (0x09CD, ""), (0x09AC, "blwf")]),
    def(0xE2BB, &[(0x09B6, ""), (0x09CD, ""), (0x09AC, "blwf")]),
    def(0xE2BC, &[(0x09B7, ""), (0x09CD, ""), (0x09AC, "blwf")]),
    def(0xE2BD, &[(0x09B8, ""), (0x09CD, ""), (0x09AC, "blwf")]),
    def(0xE2BE, &[(0x09B9, ""), (0x09CD, ""), (0x09AC, "blwf")]),
    def(0xE300, &[(0x0995, ""), (0x09CD, ""), (0x0995, "cjct")]),
    def(0xE301, &[(0x0995, ""), (0x09CD, ""), (0x099F, "cjct")]),
    def(0xE302, &[(0x0995, ""), (0x09CD, ""), (0x09A4, "cjct")]),
    def(0xE303, &[(0x0995, ""), (0x09CD, ""), (0x09AE, "cjct")]),
    def(0xE304, &[(0x0995, ""), (0x09CD, ""), (0x09B2, "cjct")]),
    def(0xE305, &[(0x0995, ""), (0x09CD, ""), (0x09B7, "akhn")]),
    def(0xE306, &[(0x0995, ""), (0x09CD, ""), (0x09B8, "cjct")]),
    def(0xE307, &[(0x0997, ""), (0x09CD, ""), (0x09A7, "cjct")]),
    def(0xE308, &[(0x0997, ""), (0x09CD, ""), (0x09A8, "cjct")]),
    def(0xE309, &[(0x0997, ""), (0x09CD, ""), (0x09B2, "cjct")]),
    def(0xE30A, &[(0x0998, ""), (0x09CD, ""), (0x09A8, "cjct")]),
    def(0xE30B, &[(0x0999, ""), (0x09CD, ""), (0x0995, "cjct")]),
    def(0xE30C, &[(0x0999, ""), (0x09CD, ""), (0x0996, "cjct")]),
    def(0xE30D, &[(0x0999, ""), (0x09CD, ""), (0x0997, "cjct")]),
    def(0xE30E, &[(0x0999, ""), (0x09CD, ""), (0x0998, "cjct")]),
    def(0xE30F, &[(0x0999, ""), (0x09CD, ""), (0x09AE, "cjct")]),
    def(0xE310, &[(0x099A, ""), (0x09CD, ""), (0x099A, "cjct")]),
    def(0xE311, &[(0x099A, ""), (0x09CD, ""), (0x099B, "cjct")]),
    def(0xE312, &[(0x099C, ""), (0x09CD, ""), (0x099C, "cjct")]),
    def(0xE313, &[(0x099C, ""), (0x09CD, ""), (0x099D, "cjct")]),
    def(0xE314, &[(0x099C, ""), (0x09CD, ""), (0x099E, "akhn")]),
    def(0xE315, &[(0x099E, ""), (0x09CD, ""), (0x099A, "cjct")]),
    def(0xE316, &[(0x099E, ""), (0x09CD, ""), (0x099B, "cjct")]),
    def(0xE317, &[(0x099E, ""), (0x09CD, ""), (0x099C, "cjct")]),
    def(0xE318, &[(0x099F, ""), (0x09CD, ""), (0x099F, "cjct")]),
    def(0xE319, &[(0x09A1, ""), (0x09CD, ""), (0x09A1, "cjct")]),
    def(0xE31A, &[(0x09A3, ""), (0x09CD, ""), (0x099F, "cjct")]),
    def(0xE31B, &[(0x09A3, ""), (0x09CD, ""), (0x09A0, "cjct")]),
    def(0xE31C, &[(0x09A3, ""), (0x09CD, ""), (0x09A1, "cjct")]),
    def(0xE31D, &[(0x09A3, ""), (0x09CD, ""), (0x09A3, "cjct")]),
    def(0xE31E, &[(0x09A4, ""), (0x09CD, ""), (0x09A4, "cjct")]),
    def(0xE31F, &[(0x09A4, ""), (0x09CD, ""), (0x09A5, "cjct")]),
    def(0xE320, &[(0x09A4, ""), (0x09CD, ""), (0x09A8, "cjct")]),
    def(0xE321, &[(0x09A4, ""), (0x09CD, ""), (0x09AE, "cjct")]),
    def(0xE322, &[(0x09A6, ""), (0x09CD, ""), (0x0997, "cjct")]),
    def(0xE323, &[(0x09A6, ""), (0x09CD, ""), (0x09A6, "cjct")]),
    def(0xE324, &[(0x09A6, ""), (0x09CD, ""), (0x09A7, "cjct")]),
    def(0xE325, &[(0x09A6, ""), (0x09CD, ""), (0x09AE, "cjct")]),
    def(0xE326, &[(0x09A7, ""), (0x09CD, ""), (0x09A8, "cjct")]),
    def(0xE327, &[(0x09A8, ""), (0x09CD, ""), (0x099F, "cjct")]),
    def(0xE328, &[(0x09A8, ""), (0x09CD, ""), (0x09A0, "cjct")]),
    def(0xE329, &[(0x09A8, ""), (0x09CD, ""), (0x09A1, "cjct")]),
    def(0xE32A, &[(0x09A8, ""), (0x09CD, ""), (0x09A4, "cjct")]),
    def(0xE32B, &[(0x09A8, ""), (0x09CD, ""), (0x09A5, "cjct")]),
    def(0xE32C, &[(0x09A8, ""), (0x09CD, ""), (0x09A6, "cjct")]),
    def(0xE32D, &[(0x09A8, ""), (0x09CD, ""), (0x09A7, "cjct")]),
    def(0xE32E, &[(0x09A8, ""), (0x09CD, ""), (0x09A8, "cjct")]),
    def(0xE32F, &[(0x09A8, ""), (0x09CD, ""), (0x09AE, "cjct")]),
    def(0xE330, &[(0x09AA, ""), (0x09CD, ""), (0x09A4, "cjct")]),
    def(0xE331, &[(0x09AA, ""), (0x09CD, ""), (0x09AA, "cjct")]),
    def(0xE332, &[(0x09AA, ""), (0x09CD, ""), (0x09B2, "cjct")]),
    def(0xE333, &[(0x09AA, ""), (0x09CD, ""), (0x09B8, "cjct")]),
    def(0xE334, &[(0x09AC, ""), (0x09CD, ""), (0x099C, "cjct")]),
    def(0xE335, &[(0x09AC, ""), (0x09CD, ""), (0x09A6, "cjct")]),
    def(0xE336, &[(0x09AC, ""), (0x09CD, ""), (0x09A7, "cjct")]),
    def(0xE337, &[(0x09AD, ""), (0x09CD, ""), (0x09B2, "cjct")]),
    def(0xE338, &[(0x09AE, ""), (0x09CD, ""), (0x09A8, "cjct")]),
    def(0xE339, &[(0x09AE, ""), (0x09CD, ""), (0x09AA, "cjct")]),
    def(0xE33A, &[(0x09AE, ""), (0x09CD, ""), (0x09AB, "cjct")]),
    def(0xE33B, &[(0x09AE, ""), (0x09CD, ""), (0x09AD, "cjct")]),
    def(0xE33C, &[(0x09AE, ""), (0x09CD, ""), (0x09AE, "cjct")]),
    def(0xE33D, &[(0x09AE, ""), (0x09CD, ""), (0x09B2, "cjct")]),
    def(0xE33E, &[(0x09B2, ""), (0x09CD, ""), (0x0995, "cjct")]),
    def(0xE33F, &[(0x09B2, ""), (0x09CD, ""), (0x0997, "cjct")]),
    def(0xE340, &[(0x09B2, ""), (0x09CD, ""), (0x099F, "cjct")]),
    def(0xE341, &[(0x09B2, ""), (0x09CD, ""), (0x09A1, "cjct")]),
    def(0xE342, &[(0x09B2, ""), (0x09CD, ""), (0x09AA, "cjct")]),
    def(0xE343, &[(0x09B2, ""), (0x09CD, ""), (0x09AE, "cjct")]),
    def(0xE344, &[(0x09B2, ""), (0x09CD, ""), (0x09B2, "cjct")]),
    def(0xE345, &[(0x09B6, ""), (0x09CD, ""), (0x099A, "cjct")]),
    def(0xE346, &[(0x09B6, ""), (0x09CD, ""), (0x099B, "cjct")]),
    def(0xE347, &[(0x09B6, ""), (0x09CD, ""), (0x09A8, "cjct")]),
    def(0xE348, &[(0x09B6, ""), (0x09CD, ""), (0x09AE, "cjct")]),
    def(0xE349, &[(0x09B6, ""), (0x09CD, ""), (0x09B2, "cjct")]),
    def(0xE34A, &[(0x09B7, ""), (0x09CD, ""), (0x0995, "cjct")]),
    def(0xE34B, &[(0x09B7, ""), (0x09CD, ""), (0x099F, "cjct")]),
    def(0xE34C, &[(0x09B7, ""), (0x09CD, ""), (0x09A0, "cjct")]),
    def(0xE34D, &[(0x09B7, ""), (0x09CD, ""), (0x09A3, "cjct")]),
    def(0xE34E, &[(0x09B7, ""), (0x09CD, ""), (0x09AA, "cjct")]),
    def(0xE34F, &[(0x09B7, ""), (0x09CD, ""), (0x09AE, "cjct")]),
    def(0xE350, &[(0x09B8, ""), (0x09CD, ""), (0x0995, "cjct")]),
    def(0xE351, &[(0x09B8, ""), (0x09CD, ""), (0x0996, "cjct")]),
    def(0xE352, &[(0x09B8, ""), (0x09CD, ""), (0x099F, "cjct")]),
    def(0xE353, &[(0x09B8, ""), (0x09CD, ""), (0x09A4, "cjct")]),
    def(0xE354, &[(0x09B8, ""), (0x09CD, ""), (0x09A5, "cjct")]),
    def(0xE355, &[(0x09B8, ""), (0x09CD, ""), (0x09A8, "cjct")]),
    def(0xE356, &[(0x09B8, ""), (0x09CD, ""), (0x09AA, "cjct")]),
    def(0xE357, &[(0x09B8, ""), (0x09CD, ""), (0x09AB, "cjct")]),
    def(0xE358, &[(0x09B8, ""), (0x09CD, ""), (0x09AE, "cjct")]),
    def(0xE359, &[(0x09B8, ""), (0x09CD, ""), (0x09B2, "cjct")]),
    def(0xE35A, &[(0x09B9, ""), (0x09CD, ""), (0x09A3, "cjct")]),
    def(0xE35B, &[(0x09B9, ""), (0x09CD, ""), (0x09A8, "cjct")]),
    def(0xE35C, &[(0x09B9, ""), (0x09CD, ""), (0x09AE, "cjct")]),
    def(0xE35D, &[(0x09B9, ""), (0x09CD, ""), (0x09B2, "cjct")]),
    def(0xE400, &[(0x0995, ""), (0x09CD, ""), (0x0995, ""), (0x09CD, ""), (0x09B0, "cjct")]),
    def(0xE401, &[(0x0995, ""), (0x09CD, ""), (0x09B7, ""), (0x09CD, ""), (0x09A3, "akhn.cjct")]),
    def(0xE402, &[(0x0995, ""), (0x09CD, ""), (0x09B7, ""), (0x09CD, ""), (0x09AE, "akhn.cjct")]),
    def(0xE403, &[(0x0999, ""), (0x09CD, ""), (0x0995, ""), (0x09CD, ""), (0x09B7, "cjct.akhn")]),
    def(0xE404, &[(0x099A, ""), (0x09CD, ""), (0x099B, ""), (0x09CD, ""), (0x09AC, "cjct.blwf")]),
    def(0xE405, &[(0x09A3, ""), (0x09CD, ""), (0x09A1, ""), (0x09CD, ""), (0x09B0, "cjct.blwf")]),
    def(0xE406, &[(0x09A8, ""), (0x09CD, ""), (0x09A4, ""), (0x09CD, ""), (0x09B0, "cjct.blwf")]),
    def(0xE407, &[(0x09A8, ""), (0x09CD, ""), (0x09A6, ""), (0x09CD, ""), (0x09B0, "cjct.blwf")]),
    def(0xE408, &[(0x09AE, ""), (0x09CD, ""), (0x09AD, ""), (0x09CD, ""), (0x09B0, "cjct.blwf")]),
    def(0xE409, &[(0x09B8, ""), (0x09CD, ""), (0x09A4, ""), (0x09CD, ""), (0x09B0, "cjct.blwf")]),
    def(0xE40A, &[(0x09B8, ""), (0x09CD, ""), (0x09AA, ""), (0x09CD, ""), (0x09B0, "cjct.blwf")]),
    def(0xE40B, &[(0x0999, ""), (0x09CD, ""), (0x0995, ""), (0x09CD, ""), (0x09B7, ""), (0x09CD, ""), (0x09A3, "cjct.akhn")]),
    def(0xE4EA, &[(0x09BF, ""), (0x09B7, ""), (0x09CD, ""), (0x099F, "pres")]),
];
