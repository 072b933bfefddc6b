//! Built-in study content, one entry per territory label.

use crate::territory::labels::*;

use super::RegistryEntry;

pub(super) static ENTRIES: &[RegistryEntry] = &[
    RegistryEntry {
        label: ACA_L,
        overview: &[
            "Supplies medial frontal/parietal cortex; callosomarginal & pericallosal branches.",
            "Somatotopy bias: leg>arm cortical representation along paracentral lobule.",
        ],
        clinical: &[
            "Contralateral leg>arm weakness/sensory loss.",
            "Akinetic mutism/abulia with cingulate involvement.",
            "Urinary incontinence (frontal micturition center).",
        ],
        research: &[
            "Perfusion MRI often shows anterior watershed vulnerability with hypotension.",
            "Callosal disconnection syndromes when pericallosal branches affected.",
        ],
        fun: &[
            "The recurrent artery of Heubner (ACA branch) loves to show up on exams.",
            "Bilateral ACA infarcts can cause “magnetic gait”.",
        ],
    },
    RegistryEntry {
        label: ACA_R,
        overview: &["Right ACA mirrors left in vascular territory; often subtler language impact."],
        clinical: &[
            "Left leg-predominant weakness; disinhibition/personality change with medial frontal damage.",
        ],
        research: &["Right mesial frontal strokes linked to impaired sustained attention networks."],
        fun: &["“Callosomarginal” sounds like a punk band; it’s actually a key ACA branch."],
    },
    RegistryEntry {
        label: MCA_L,
        overview: &[
            "Largest cerebral artery; superior division → frontal/rostral insula, inferior division → posterior temporal/parietal.",
            "Deep perforators (lenticulostriates) feed internal capsule & basal ganglia.",
        ],
        clinical: &[
            "Aphasia (Broca: nonfluent; Wernicke: fluent, paraphasic) if dominant hemisphere.",
            "Face/arm>leg weakness; gaze preference toward lesion acutely.",
            "Homonymous hemianopia from optic radiations.",
        ],
        research: &[
            "Time-to-reperfusion strongly correlates with language recovery in L-MCA; collateral grade modifies penumbra.",
            "Clot perviousness on CTA predicts thrombectomy success.",
        ],
        fun: &["“Insular ribbon sign” on CT can be an early MCA infarct clue."],
    },
    RegistryEntry {
        label: MCA_R,
        overview: &["Right lateral convexity and deep structures via lenticulostriates."],
        clinical: &[
            "Hemispatial neglect, anosognosia, constructional apraxia.",
            "Left face/arm>leg weakness; left homonymous hemianopia.",
        ],
        research: &["Right temporoparietal junction is central for salience/attention reorienting."],
        fun: &["Patients may eat only the right side of their plate—classic neglect demo."],
    },
    RegistryEntry {
        label: PCA_L,
        overview: &[
            "Arises from basilar tip; calcarine & posterior temporal branches.",
            "Thalamoperforators can be PCA-derived → thalamic syndromes.",
        ],
        clinical: &[
            "Right homonymous hemianopia; possible macular sparing.",
            "Alexia without agraphia (splenial + left occipital).",
        ],
        research: &["Visual cortex plasticity: perilesional reorganization detectable with fMRI."],
        fun: &["Patients may “not bump into things” if sparing is good despite field cut."],
    },
    RegistryEntry {
        label: PCA_R,
        overview: &["Occipital and inferior temporal cortices on the right."],
        clinical: &["Left homonymous hemianopia; prosopagnosia if inferior occipitotemporal involved."],
        research: &["Right fusiform damage links to face identity processing deficits."],
        fun: &["Prosopagnosia is not “just forgetting names”—faces become unrecognizable."],
    },
    RegistryEntry {
        label: M1,
        overview: &[
            "Precentral gyrus; corticospinal origin with somatotopy (homunculus).",
            "Large Betz cells in layer V project to spinal motor neurons.",
        ],
        clinical: &[
            "Contralateral UMN signs; fractionated finger weakness common.",
            "Seizure focus can cause Jacksonian march.",
        ],
        research: &["Motor maps show experience-dependent plasticity; rTMS can modulate excitability."],
        fun: &["Penfield’s “homunculus” drawings were based on intraoperative stimulation."],
    },
    RegistryEntry {
        label: S1,
        overview: &["Postcentral gyrus; modality-specific columns (touch, proprioception)."],
        clinical: &["Cortical sensory loss: graphesthesia, stereognosis deficits."],
        research: &["Use-dependent expansion of cortical representations in musicians/athletes."],
        fun: &["Two-point discrimination thresholds vary dramatically across body sites."],
    },
    RegistryEntry {
        label: BROCA,
        overview: &[
            "Inferior frontal gyrus (opercularis/triangularis) in dominant hemisphere.",
            "Supports speech motor planning and syntactic processing.",
        ],
        clinical: &[
            "Nonfluent/effortful speech; comprehension relatively preserved; impaired repetition.",
        ],
        research: &["White-matter coupling with premotor & basal ganglia circuits critical for fluency."],
        fun: &["Broca identified the region in 1861 correlating lesions with expressive aphasia."],
    },
    RegistryEntry {
        label: WERNICKE,
        overview: &["Posterior superior temporal (dominant); lexical-semantic processing."],
        clinical: &["Fluent, paraphasic speech; impaired comprehension; neologisms; poor repetition."],
        research: &[
            "Disconnection (arcuate fasciculus) can yield conduction aphasia—repetition disproportionately impaired.",
        ],
        fun: &["Patients may be unaware of deficits (anosognosia for language)."],
    },
    RegistryEntry {
        label: V1,
        overview: &[
            "Calcarine cortex; precise retinotopy; dual-stream output to dorsal/ventral pathways.",
        ],
        clinical: &[
            "Congruous field cuts; macular sparing via dual supply (MCA/PCA anastomoses) is possible.",
        ],
        research: &["Blind-sight phenomena: subcortical pathways mediating residual vision."],
        fun: &["Occipital cortex can “light up” with auditory stimuli in congenitally blind individuals."],
    },
    RegistryEntry {
        label: AUDITORY,
        overview: &[
            "Heschl’s gyrus; tonotopic gradients; bilateral representation with slight contralateral bias.",
        ],
        clinical: &["Cortical deafness is rare; more commonly, word deafness or auditory agnosia."],
        research: &["Experience tunes cortical tuning curves; music training sharpens phase-locking."],
        fun: &["You literally have frequency maps in cortex—like a piano keyboard curled up."],
    },
    RegistryEntry {
        label: L_MCA_STROKE,
        overview: &["Ischemia in dominant lateral convexity/deep structures; embolic sources common."],
        clinical: &[
            "Aphasia, right face/arm weakness, right homonymous hemianopia.",
            "Gaze preference toward lesion early.",
        ],
        research: &[
            "Reperfusion within “golden hours” maximizes language recovery; collateral status predicts core growth.",
        ],
        fun: &["“Time is brain”: ~1.9 million neurons lost per minute in untreated stroke (modeled estimate)."],
    },
    RegistryEntry {
        label: R_MCA_STROKE,
        overview: &["Non-dominant lateral convexity; neglect syndromes hallmark."],
        clinical: &["Left neglect, anosognosia, left homonymous hemianopia, left face/arm weakness."],
        research: &[
            "Right temporoparietal damage alters salience network; prism adaptation can transiently reduce neglect.",
        ],
        fun: &["Patients may shave only the right side of their face—classic ward anecdote."],
    },
    RegistryEntry {
        label: L_ACA_STROKE,
        overview: &["Medial frontal/parietal ischemia in dominant hemisphere."],
        clinical: &["Right leg>arm weakness; abulia/akinetic mutism; incontinence."],
        research: &["Cingulo-frontal networks implicated in motivation/initiative deficits."],
        fun: &["Bilateral ACA infarcts after A1 anomalies are a known pitfall."],
    },
    RegistryEntry {
        label: R_ACA_STROKE,
        overview: &["Medial frontal/parietal ischemia (non-dominant)."],
        clinical: &["Left leg>arm weakness; behavioral disinhibition."],
        research: &["Right mesial frontal lesions: deficits in sustained attention vigilance."],
        fun: &["“Alien leg” sensations described in rare case reports."],
    },
    RegistryEntry {
        label: PCA_STROKE,
        overview: &["Posterior circulation cortical infarction."],
        clinical: &["Contralateral homonymous hemianopia; visual agnosias possible."],
        research: &["Perfusion–diffusion mismatch in occipital lobe predicts recovery of fields."],
        fun: &["Reading can recover faster than visual search—different pathways."],
    },
    RegistryEntry {
        label: LACUNAR,
        overview: &["Small vessel lipohyalinosis of perforators → internal capsule/thalamus/pons."],
        clinical: &["Pure motor, pure sensory, ataxic hemiparesis, dysarthria–clumsy hand syndromes."],
        research: &[
            "Blood–brain barrier leakage & perivascular spaces correlate with small vessel disease burden.",
        ],
        fun: &[
            "Despite tiny size, capsular lacunes can produce dense hemiparesis—location beats volume.",
        ],
    },
];
