/// Marker replaced by the (shortened) idea text.
pub const IDEA_PLACEHOLDER: &str = "{idea}";

pub const ROAST_TEMPLATES: &[&str] = &[
    "'{idea}'? Das klingt wie etwas, das ein BWL-Student nach dem dritten Bier auf nem Serviette skizziert hat.",
    "Ah ja, '{idea}'. Die Investoren werden sich drum prügeln. Und zwar darum, wer als erster ablehnen darf.",
    "'{idea}' - Endlich löst jemand ein Problem, das niemand hat. Danke dafür.",
    "Lass mich raten: '{idea}' kam dir unter der Dusche? Hättest du mal lieber länger geduscht.",
    "'{idea}'? Digga, selbst deine Mutter würde da nicht investieren. Und die kauft noch Tupperware.",
    "Das Schöne an '{idea}' ist: Wenn es scheitert, wird niemand überrascht sein.",
    "'{idea}' klingt wie etwas, das ChatGPT generiert wenn man es fragt 'Gib mir die dümmste Startup-Idee'.",
    "Ich hab '{idea}' meiner Katze erklärt. Sie hat mich angeschaut und ist gegangen. Selbst sie hat Standards.",
    "'{idea}'? In welchem Paralleluniversum funktioniert das? Und wie komm ich dahin um es zu verhindern?",
    "Cool, '{idea}'. Hast du auch schon die Domain gesichert? wir-sind-pleite.de wäre passend.",
    "'{idea}' - Das ist nicht disruptiv, das ist destruktiv. Für dein Bankkonto.",
    "Wenn '{idea}' eine Person wäre, würde sie alleine am Buffet stehen und so tun als würde sie telefonieren.",
    "'{idea}'? Ich hab schlechte Ideen gesehen, aber du setzt neue Maßstäbe. Respekt.",
    "Das Gute an '{idea}': Du sparst Geld für den Therapeuten, weil das Scheitern offensichtlich ist.",
    "'{idea}' ist wie ein Fallschirm aus Blei. Technisch gesehen ein Fallschirm. Praktisch gesehen ein Problem.",
];
