//! Reference key sheets with known plaintext/ciphertext pairs.
//!
//! Each vector is an independently published historical-machine test case.
//! The lock tests encode every plaintext and require the exact ciphertext,
//! then decode it back from the same key.

use stecker_kernel::components::catalog::{ReflectorId, RotorId};
use stecker_machine::{
    Machine, MachineSettings, ModelId, ReflectorSettings, RotorSettings, RotorSlot,
};

/// Shared plaintext of the M3 and M4 vectors.
pub const LOREM: &str = "LOREMQQIPSUMQQDOLORQQSITQQAMETQQCONSECTETUERQQADIPISCINGQQELITQQAENEANQQVELQQMASSAQQQUISQQMAURISQQVEHICULAQQLACINIAQQCURABITURQQSAGITTISQQHENDRERITQQANTEQQNAMQQQUISQQNULLAQQETIAMQQQUISQQQUAMQQALIQUAMQQINQQLOREMQQSITQQAMETQQLEOQQACCUMSANQQLACINIA";

/// 200 × `A` through M3 I-II-III (left to right), reflector B.
pub const TWO_HUNDRED_A_CIPHERTEXT: &str = "BDZGOWCXLTKSBTMCDLPBMUQOFXYHCXTGYJFLINHNXSHIUNTHEORXPQPKOVHCBUBTZSZSOOSTGOTFSODBBZZLXLCYZXIFGWFDZEEQIBMGFJBWZFCKPFMGBXQCIVIBBRNCOCJUVYDKMVJPFMDRMTGLWFOZLXGJEYYQPVPBWNCKVKLZTCBDLDCTSNRCOOVPTGBVBBISGJSO";

/// A key sheet with its expected plaintext/ciphertext pair.
#[derive(Debug, Clone)]
pub struct ReferenceVector {
    pub name: &'static str,
    pub settings: MachineSettings,
    pub plaintext: String,
    pub ciphertext: &'static str,
}

/// Split `"AB CD EF"` into symbol pairs. Test-side convenience only.
///
/// # Panics
///
/// Panics if a group is not exactly two symbols.
#[must_use]
pub fn pairs(groups: &str) -> Vec<(char, char)> {
    groups
        .split_whitespace()
        .map(|group| {
            let symbols: Vec<char> = group.chars().collect();
            assert_eq!(symbols.len(), 2, "pair group {group:?} is not two symbols");
            (symbols[0], symbols[1])
        })
        .collect()
}

/// Rotor settings for one slot.
#[must_use]
pub fn rotor(id: RotorId, wheel: char, ring: usize) -> RotorSettings {
    RotorSettings::new()
        .with_rotor(id)
        .with_wheel(wheel)
        .with_ring(ring)
}

/// Three-rotor key sheet, rotors given left to right as an operator reads them.
#[must_use]
pub fn three_rotor_sheet(
    model: ModelId,
    left: RotorSettings,
    middle: RotorSettings,
    right: RotorSettings,
) -> MachineSettings {
    MachineSettings::new(model)
        .with_rotor(RotorSlot::Left, left)
        .with_rotor(RotorSlot::Middle, middle)
        .with_rotor(RotorSlot::Right, right)
}

/// Build a machine from a sheet.
///
/// # Panics
///
/// Panics if the sheet is rejected; reference sheets are known good.
#[must_use]
pub fn machine(settings: &MachineSettings) -> Machine {
    Machine::from_settings(settings)
        .unwrap_or_else(|err| panic!("reference sheet rejected: {err}"))
}

/// M3 I-II-III (left to right), reflector B, everything else default.
#[must_use]
pub fn m3_i_ii_iii_b() -> MachineSettings {
    three_rotor_sheet(
        ModelId::M3,
        RotorSettings::new().with_rotor(RotorId::I),
        RotorSettings::new().with_rotor(RotorId::II),
        RotorSettings::new().with_rotor(RotorId::III),
    )
    .with_reflector(ReflectorSettings::new().with_reflector(ReflectorId::B))
}

/// Every reference vector, one or more per model.
#[must_use]
#[allow(clippy::too_many_lines)]
pub fn reference_vectors() -> Vec<ReferenceVector> {
    vec![
        ReferenceVector {
            name: "m3-200a",
            settings: m3_i_ii_iii_b(),
            plaintext: "A".repeat(200),
            ciphertext: TWO_HUNDRED_A_CIPHERTEXT,
        },
        ReferenceVector {
            name: "m3-full",
            settings: three_rotor_sheet(
                ModelId::M3,
                rotor(RotorId::III, 'D', 12),
                rotor(RotorId::VII, 'U', 8),
                rotor(RotorId::VIII, 'S', 6),
            )
            .with_reflector(ReflectorSettings::new().with_reflector(ReflectorId::C))
            .with_plugboard(&pairs("AI BX CU DF EN GQ HM JL KT OP")),
            plaintext: LOREM.to_string(),
            ciphertext: "JRKGDLRCOURDHDKHEEOOWVEJVPOOKOBHFFQXDNWDYEDDTKDWLRGLSJMBRRQYHQRUPUBVYHTIABJNKZYPRQVJXTXOZWOSIMQHDYWHUHKZGCVXDIYURDQGOIHNFMMDYMXDPFKXZQTXZMZGYOYBQKIFXPFSXHYBOWRSYQWLXHMIIEHUWPOJJSSBNOSCPELDEENEGTMXWZQRTXCKRQLGFQKBUOBKEBXVGWFYIRSFHBPRAWKIBEPLBMCEW",
        },
        ReferenceVector {
            name: "m4",
            settings: three_rotor_sheet(
                ModelId::M4,
                rotor(RotorId::VI, 'X', 16),
                rotor(RotorId::I, 'A', 23),
                rotor(RotorId::VII, 'Q', 2),
            )
            .with_rotor(RotorSlot::Fourth, rotor(RotorId::Gamma, 'L', 18))
            .with_reflector(ReflectorSettings::new().with_reflector(ReflectorId::BThin)),
            plaintext: LOREM.to_string(),
            ciphertext: "HZAFDYHADNXFLGTKODHHUCMCKFKFLOSTSMRPZNBLIZSYXGGTEGUHNQQEDLQHPWYYMGSGNEYVWTSSOULABUDOWBMDRKLDNOWUMBFXESNFHBEUIXFXGNUJBKWEYJUGMPXIXONQNKDWIIVOGCFACLZZXWKDRDKRRJXGYLCAPWSWWPWFFPICTUOVHPMUNXNKVRTPKWXDEXYGFWFPYYCDBZVKYCMGMCKDVLJOJJFFCSHGXYXZCPTBORTDL",
        },
        ReferenceVector {
            name: "m4-ukw-d",
            settings: three_rotor_sheet(
                ModelId::M4UkwD,
                rotor(RotorId::I, 'D', 17),
                rotor(RotorId::II, 'U', 5),
                rotor(RotorId::III, 'Z', 8),
            )
            .with_reflector(
                ReflectorSettings::new()
                    .with_reflector(ReflectorId::D)
                    .with_wiring(&pairs("AQ BG CK DI EL FX HZ MW NV OT PU RS")),
            ),
            plaintext: "THERESQQTWOQQMISSINGQQPIECESQQFIRSTQQTHEQQRINGQQSETTINGQQCHANGESQQTHEQQOUTPUTQQLETTERQQITQQDOESNTQQROTATEQQTHEQQWHOLEQQEXITQQPATTERNQQSECONDQQTHEQQROTORSQQAREQQADVANCEDQQBEFOREQQTHEQQLETTERQQISQQENCRYPTED".to_string(),
            ciphertext: "KRHAIKWYFOKTFNNPVCDJAFHFUGNFNIILPGSIURPSCJUKRWKJNBOJFDNHNGVVEJMLFEGQOEMQKFHHCMLPCDMVDXOADJYQTVQWASKPCDSOFVVLIABJHVCEDRRGZVIKWDWCBVJXUZUMGZUEWFBWVDSMPXLYJKCQHLWCYNGTRUWUFWDHGAOPLNOAZIPNRYSGPZWHDYTUBYWBZZIS",
        },
        ReferenceVector {
            name: "commercial",
            settings: three_rotor_sheet(
                ModelId::Commercial,
                rotor(RotorId::IIIK, 'G', 6),
                rotor(RotorId::IK, 'Z', 18),
                rotor(RotorId::IIK, 'J', 4),
            )
            .with_reflector(ReflectorSettings::new().with_reflector(ReflectorId::K).with_wheel('Y')),
            plaintext: "WHENQQBLETCHLEYQQPARKQQWASQQFIRSTQQOPENEDQQASQQAQQMUSEUMQQAROUNDQQTWOQQTHOUSANDQQTHEYQQHADQQANQQENIGMAQQONQQDISPLAYQQTHATQQCOULDQQBEQQTOUCHEDQQBYQQTHEQQPUBLICQQITQQWASQQPARTQQOFQQTHEQQSOCALLEDQQCRYPTOQQTRAILQQTHATQQALLOWEDQQVISITORSQQTOQQFOLLOWQQTHEQQFLOWQQOFQQANQQENIGMAQQMESSAGE".to_string(),
            ciphertext: "ISZZXPSFLMUMSNFXOGHEQIINTXJCAHQLBRELBJWAQWRJIUWUJILFKOPUOLUEXOKVFXLQCOKGNKVHYLBGDRYNGOPVQWIXNVXHOYDEAULBABSTTTZMRCFGXVFSOFZQPKRQKGKREOAXYLCBCZRHMUIRCHCGCNQIEABYWSNWMHOJVQGHWZETBYKBWJMLPRWKMNDMMARELELXKEFIWREMOSJLFESCDCRVOWVVFAMDUAQBRFQLRILGAZYCEPIIZLSXMWPJJMLHRGGMWCYDCTKCEOQJGMZC",
        },
        ReferenceVector {
            name: "swiss-k",
            settings: three_rotor_sheet(
                ModelId::SwissK,
                rotor(RotorId::IISK, 'A', 2),
                rotor(RotorId::ISK, 'X', 19),
                rotor(RotorId::IIISK, 'L', 4),
            )
            .with_reflector(ReflectorSettings::new().with_reflector(ReflectorId::K).with_wheel('F')),
            plaintext: "ALLQQENIGMAQQKQQMACHINESQQWEREQQDELIVEREDQQBYQQTHEQQGERMANSQQWITHQQTHEQQSTANDARDQQCOMMERCIALQQWHEELQQWIRINGQQALSOQQKNOWNQQFROMQQTHEQQENIGMAQQDQQSEEQQTHEQQTABLEQQBELOWQQIMMEDIATELYQQAFTERQQRECEPTIONQQHOWEVERQQTHEQQSWISSQQCHANGEDQQTHEQQWIRINGQQOFQQALLQQCIPHERQQWHEELS".to_string(),
            ciphertext: "MKXPZMCGHRSVAMKALKDJGSRJIKZRPPCFUHWOOBGXKAFQSRFFWMXOVWGVKUKJIJKWVGIGSYIUNYFACJOUGRTQIZSZRTNNHKNGHSIETRPWLKXLSMGOIBPZSYUPIECXWHINIJSRMBMJRJHOOEABFWJZHMXGCXICDNFNVLNIPJGDXIDVEHXSPGDMGEWCCYUGXXBIHJLUXTSMRKIZVDDGNDGLHJHOXVZSYOVPVCYOOBPFYVENEQQXGIXAILVHSSVXAZURPZMLCPFEJ",
        },
        ReferenceVector {
            name: "tripitz",
            settings: three_rotor_sheet(
                ModelId::Tripitz,
                rotor(RotorId::IIIT, 'W', 13),
                rotor(RotorId::VIIIT, 'W', 25),
                rotor(RotorId::IT, 'W', 2),
            ),
            plaintext: "THEQQENIGMAQQTQQTIRPITZQQWASQQAQQSPECIALQQVERSIONQQOFQQTHEQQENIGMAQQKQQTHATQQWASQQMADEQQFORQQTHEQQJAPANESEQQARMYQQDURINGQQWWIIQQTHEQQWHEELSQQWEREQQWIREDQQDIFFERENTLYQQANDQQEACHQQHADQQFIVEQQTURNOVERQQNOTCHESQQQQTHEQQTABLEQQBELOWQQSHOWSQQTHEQQWIRINGQQOFQQTHEQQWHEELSQQTHEQQETWQQANDQQUKW".to_string(),
            ciphertext: "NSLLDBIGRLEJHUKZRVIOYXAPGYDZLIKWILEVAGJKXBJBQTMTKSHSHXPVCJYUWJFLPHSJQIGEUBIKHPBONFFBHYTSIHJCUDFOPNEYTVLBVCWIGXADLLZRFGHCNCYHMPYGFJONRBXMAQANGKXOLZLTXMVWHNZLQDNJQDLXGATRRNGOIHNQMKVYPJFUSAPIAQDHVJUATOXYFSNTVWEHIYXEXZJMGICNRLDKKNEAWGRHKDRNBCLSTJFXNZYBCEGBWCSRLCIRAOHYNHEDCEIZILFMTAPMGEFD",
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pairs_splits_groups() {
        assert_eq!(pairs("AB  CD"), vec![('A', 'B'), ('C', 'D')]);
        assert!(pairs("").is_empty());
    }

    #[test]
    fn vector_names_are_unique() {
        let vectors = reference_vectors();
        let mut names: Vec<&str> = vectors.iter().map(|v| v.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), vectors.len());
    }
}
